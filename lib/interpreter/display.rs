use std::io::Write;

use anyhow::{bail, Result};

use super::{parse_number, Executor};
use crate::{number::format_number, token::TokenKind};

impl<'a, W: Write> Executor<'a, W> {
    /// Builds the text of a `print` argument list. Terms are concatenated
    /// with no separator; commas between them are optional.
    pub(super) fn display_expression(&mut self) -> Result<String> {
        let mut line = String::new();

        loop {
            match self.cur_token.kind {
                TokenKind::End | TokenKind::Semicolon | TokenKind::Rparen => return Ok(line),
                TokenKind::String => {
                    line.push_str(&self.cur_token.literal);
                    self.eat(TokenKind::String)?;
                }
                TokenKind::Ident => {
                    // lenient: an unbound name prints as 0, while numeric
                    // expressions reject it. Both behaviors are intended.
                    let value = self.env.get_or_default(&self.cur_token.literal);
                    line.push_str(&format_number(value));
                    self.eat(TokenKind::Ident)?;
                }
                TokenKind::Number => {
                    let value = parse_number(&self.cur_token.literal)?;
                    line.push_str(&format_number(value));
                    self.eat(TokenKind::Number)?;
                }
                TokenKind::Comma => self.eat(TokenKind::Comma)?,
                _ => bail!(
                    "cannot use {} inside print arguments",
                    self.cur_token
                ),
            }
        }
    }
}
