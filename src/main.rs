use std::{
    ffi::OsString,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use tally::Completion;

const SUCCESS: u8 = 0;
const FAILURE: u8 = 1;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// source file to run
    #[arg(name = "FILE")]
    file: PathBuf,
}

fn main() -> ExitCode {
    let status = execute(
        std::env::args_os(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(status)
}

/// Runs the command line `args`, returning the process exit status.
fn execute<I, T>(args: I, out: &mut impl Write, err_out: &mut impl Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // help and version requests are not errors
        Err(err) if !err.use_stderr() => {
            let _ = write!(out, "{err}");
            return SUCCESS;
        }
        Err(err) => {
            let _ = write!(err_out, "{err}");
            return FAILURE;
        }
    };

    let outcome = read_source(&cli.file).and_then(|source| tally::run(&source, &mut *out));
    report(outcome, err_out)
}

/// Maps the outcome of a run to an exit status, writing any diagnostic.
fn report(outcome: Result<Completion>, err_out: &mut impl Write) -> u8 {
    match outcome {
        Ok(Completion::Finished) => SUCCESS,
        Ok(Completion::Halted { token }) => {
            let _ = writeln!(err_out, "syntax error: unexpected token {token}");
            SUCCESS
        }
        Err(err) => {
            let _ = writeln!(err_out, "error: {err:#}");
            FAILURE
        }
    }
}

/// Reads the whole file. Bytes that are not valid UTF-8 become U+FFFD rather
/// than failing the read.
fn read_source(file: &Path) -> Result<String> {
    let bytes =
        fs::read(file).with_context(|| format!("could not open file {}", file.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
