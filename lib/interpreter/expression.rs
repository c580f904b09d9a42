use std::io::Write;

use anyhow::{bail, Result};

use super::{parse_number, Executor};
use crate::token::TokenKind;

// expr   := term (('+' | '-') term)*
// term   := factor (('*' | '/') factor)*
// factor := NUMBER | IDENTIFIER | '(' expr ')'
impl<'a, W: Write> Executor<'a, W> {
    pub(super) fn expression(&mut self) -> Result<f64> {
        let mut result = self.term()?;
        loop {
            match self.cur_token.kind {
                TokenKind::Plus => {
                    self.eat(TokenKind::Plus)?;
                    result += self.term()?;
                }
                TokenKind::Minus => {
                    self.eat(TokenKind::Minus)?;
                    result -= self.term()?;
                }
                _ => return Ok(result),
            }
        }
    }

    fn term(&mut self) -> Result<f64> {
        let mut result = self.factor()?;
        loop {
            match self.cur_token.kind {
                TokenKind::Star => {
                    self.eat(TokenKind::Star)?;
                    result *= self.factor()?;
                }
                // no zero check, inf and NaN flow through
                TokenKind::Slash => {
                    self.eat(TokenKind::Slash)?;
                    result /= self.factor()?;
                }
                _ => return Ok(result),
            }
        }
    }

    fn factor(&mut self) -> Result<f64> {
        match self.cur_token.kind {
            TokenKind::Number => {
                let value = parse_number(&self.cur_token.literal)?;
                self.eat(TokenKind::Number)?;
                Ok(value)
            }
            TokenKind::Ident => {
                let name = self.cur_token.literal.clone();
                self.eat(TokenKind::Ident)?;
                // strict: arithmetic on an unbound name is an error, unlike
                // print arguments which read it as zero
                self.env.get(&name)
            }
            TokenKind::Lparen => {
                self.eat(TokenKind::Lparen)?;
                let value = self.expression()?;
                self.eat(TokenKind::Rparen)?;
                Ok(value)
            }
            _ => bail!(
                "expected number, identifier, or expression, found {}",
                self.cur_token
            ),
        }
    }
}
