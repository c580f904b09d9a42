pub mod environment;
pub mod interpreter;
pub mod lexer;
pub mod number;
pub mod token;

use std::io::Write;

use anyhow::Result;

pub use environment::Environment;
pub use interpreter::{Completion, Interpreter};
pub use lexer::Lexer;
pub use number::format_number;
pub use token::{Token, TokenKind};

/// Runs `source` with a fresh environment, writing printed lines to `out`.
pub fn run(source: &str, out: impl Write) -> Result<Completion> {
    Interpreter::new(out).run(source)
}
