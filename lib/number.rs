/// Renders a value the way `print` shows it: fixed-point with six fractional
/// digits, trailing zeros removed, and the decimal point dropped when nothing
/// is left after it.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}
