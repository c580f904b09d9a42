use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::token::{Token, TokenKind};

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut keywords = HashMap::new();
        keywords.insert("print", TokenKind::Print);
        keywords
    };
}

/// Pull-based tokenizer. Each call to [`Lexer::next_token`] scans exactly one
/// token; once the input is exhausted every call returns an `End` token.
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let char = chars.first().copied();
        Self {
            chars,
            position: 0,
            char,
        }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            while self.char.is_some_and(|char| char.is_whitespace()) {
                self.read_char();
            }
            if self.char == Some('/') && self.is_next_char('/') {
                self.skip_comment();
                continue;
            }
            break;
        }

        let Some(char) = self.char else {
            return Token::end();
        };

        match char {
            '"' => self.read_string(),
            '-' if self.next_char().is_some_and(|next| next.is_ascii_digit()) => {
                self.read_number()
            }
            _ if char.is_ascii_digit() => self.read_number(),
            _ if char.is_ascii_alphabetic() => self.read_word(),
            _ => {
                let kind = match char {
                    '+' => TokenKind::Plus,
                    '-' => TokenKind::Minus,
                    '*' => TokenKind::Star,
                    '/' => TokenKind::Slash,
                    '=' => TokenKind::Assign,
                    ';' => TokenKind::Semicolon,
                    '(' => TokenKind::Lparen,
                    ')' => TokenKind::Rparen,
                    ',' => TokenKind::Comma,
                    _ => TokenKind::Unknown,
                };
                self.read_char();
                Token::new(kind, char)
            }
        }
    }

    fn read_char(&mut self) {
        if self.position < self.chars.len() {
            self.position += 1;
        }
        self.char = self.chars.get(self.position).copied();
    }

    fn next_char(&self) -> Option<char> {
        self.chars.get(self.position + 1).copied()
    }

    fn is_next_char(&self, ch: char) -> bool {
        self.next_char() == Some(ch)
    }

    fn read_while(&mut self, condition: impl Fn(char) -> bool) -> String {
        let mut literal = String::new();
        while let Some(char) = self.char {
            if !condition(char) {
                break;
            }
            literal.push(char);
            self.read_char();
        }
        literal
    }

    fn skip_comment(&mut self) {
        self.read_while(|char| char != '\n');
    }

    fn read_string(&mut self) -> Token {
        self.read_char();
        let literal = self.read_while(|char| char != '"');
        // unterminated strings keep whatever was read up to end of input
        if self.char.is_some() {
            self.read_char();
        }
        Token::new(TokenKind::String, literal)
    }

    fn read_number(&mut self) -> Token {
        let mut literal = String::new();
        if self.char == Some('-') {
            literal.push('-');
            self.read_char();
        }

        let mut seen_dot = false;
        while let Some(char) = self.char {
            if char == '.' {
                if seen_dot {
                    break;
                }
                seen_dot = true;
            } else if !char.is_ascii_digit() {
                break;
            }
            literal.push(char);
            self.read_char();
        }

        Token::new(TokenKind::Number, literal)
    }

    fn read_word(&mut self) -> Token {
        let literal = self.read_while(|char| char.is_ascii_alphanumeric() || char == '_');
        let kind = KEYWORDS
            .get(literal.as_str())
            .copied()
            .unwrap_or(TokenKind::Ident);
        Token::new(kind, literal)
    }
}

/// Yields every token up to, but not including, `End`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is(TokenKind::End)).then_some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(input)
            .map(|token| (token.kind, token.literal))
            .collect()
    }

    fn tok(kind: TokenKind, literal: &str) -> (TokenKind, String) {
        (kind, literal.to_string())
    }

    #[test]
    fn test_lexer() {
        let input = r#"
                    // totals for the week
                    total = (price + 2.5) * count;
                    ratio = total / -4;
                    print("total: ", total, ratio);
                    "#;

        let expected = vec![
            tok(TokenKind::Ident, "total"),
            tok(TokenKind::Assign, "="),
            tok(TokenKind::Lparen, "("),
            tok(TokenKind::Ident, "price"),
            tok(TokenKind::Plus, "+"),
            tok(TokenKind::Number, "2.5"),
            tok(TokenKind::Rparen, ")"),
            tok(TokenKind::Star, "*"),
            tok(TokenKind::Ident, "count"),
            tok(TokenKind::Semicolon, ";"),
            tok(TokenKind::Ident, "ratio"),
            tok(TokenKind::Assign, "="),
            tok(TokenKind::Ident, "total"),
            tok(TokenKind::Slash, "/"),
            tok(TokenKind::Number, "-4"),
            tok(TokenKind::Semicolon, ";"),
            tok(TokenKind::Print, "print"),
            tok(TokenKind::Lparen, "("),
            tok(TokenKind::String, "total: "),
            tok(TokenKind::Comma, ","),
            tok(TokenKind::Ident, "total"),
            tok(TokenKind::Comma, ","),
            tok(TokenKind::Ident, "ratio"),
            tok(TokenKind::Rparen, ")"),
            tok(TokenKind::Semicolon, ";"),
        ];

        assert_eq!(kinds(input), expected);
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "x"));
        for _ in 0..3 {
            assert_eq!(lexer.next_token(), Token::end());
        }

        let mut empty = Lexer::new("   \n\t ");
        assert_eq!(empty.next_token(), Token::end());
        assert_eq!(empty.next_token(), Token::end());
    }

    #[test]
    fn test_comments_are_transparent() {
        let tests = vec![
            ("// comment\nx = 1;", "x = 1;"),
            ("x = 1; // trailing", "x = 1;"),
            ("// one\n// two\n\nx = 1;", "x = 1;"),
            ("x = 1;\n// no newline at end", "x = 1;"),
        ];

        for (input, expected) in tests {
            assert_eq!(kinds(input), kinds(expected), "input: {input:?}");
        }
    }

    #[test]
    fn test_numbers() {
        let tests = vec![
            ("42", vec![tok(TokenKind::Number, "42")]),
            ("3.25", vec![tok(TokenKind::Number, "3.25")]),
            ("-7", vec![tok(TokenKind::Number, "-7")]),
            ("-0.5", vec![tok(TokenKind::Number, "-0.5")]),
            ("10.", vec![tok(TokenKind::Number, "10.")]),
            (
                "1.2.3",
                vec![
                    tok(TokenKind::Number, "1.2"),
                    tok(TokenKind::Unknown, "."),
                    tok(TokenKind::Number, "3"),
                ],
            ),
            (
                "5 - 3",
                vec![
                    tok(TokenKind::Number, "5"),
                    tok(TokenKind::Minus, "-"),
                    tok(TokenKind::Number, "3"),
                ],
            ),
            (
                "5-3",
                vec![tok(TokenKind::Number, "5"), tok(TokenKind::Number, "-3")],
            ),
            (
                "- 3",
                vec![tok(TokenKind::Minus, "-"), tok(TokenKind::Number, "3")],
            ),
        ];

        for (input, expected) in tests {
            assert_eq!(kinds(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_identifiers_and_keywords() {
        let tests = vec![
            ("print", vec![tok(TokenKind::Print, "print")]),
            ("printer", vec![tok(TokenKind::Ident, "printer")]),
            ("Print", vec![tok(TokenKind::Ident, "Print")]),
            ("snake_case_2", vec![tok(TokenKind::Ident, "snake_case_2")]),
            (
                "_lead",
                vec![tok(TokenKind::Unknown, "_"), tok(TokenKind::Ident, "lead")],
            ),
            ("a1b", vec![tok(TokenKind::Ident, "a1b")]),
        ];

        for (input, expected) in tests {
            assert_eq!(kinds(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_strings() {
        let tests = vec![
            (r#""hello world""#, vec![tok(TokenKind::String, "hello world")]),
            (r#""""#, vec![tok(TokenKind::String, "")]),
            (
                r#""// not a comment""#,
                vec![tok(TokenKind::String, "// not a comment")],
            ),
            (r#""unterminated"#, vec![tok(TokenKind::String, "unterminated")]),
            (
                r#""a""b""#,
                vec![tok(TokenKind::String, "a"), tok(TokenKind::String, "b")],
            ),
        ];

        for (input, expected) in tests {
            assert_eq!(kinds(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_unknown_characters_advance() {
        let expected = vec![
            tok(TokenKind::Unknown, "#"),
            tok(TokenKind::Unknown, "@"),
            tok(TokenKind::Ident, "x"),
            tok(TokenKind::Unknown, "{"),
        ];
        assert_eq!(kinds("#@x{"), expected);
    }
}
