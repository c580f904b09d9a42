mod display;
mod expression;

use std::io::Write;

use anyhow::{bail, Context, Result};

use crate::{
    environment::Environment,
    lexer::Lexer,
    token::{Token, TokenKind},
};

/// How a run ended when no fatal error occurred.
#[derive(Debug, PartialEq, Clone)]
pub enum Completion {
    /// Every statement up to end of input was executed.
    Finished,
    /// A statement started with a token that begins neither a print nor an
    /// assignment. Nothing from that token onward was executed.
    Halted { token: Token },
}

/// Executes programs against a persistent environment, writing each printed
/// line to `out`.
pub struct Interpreter<W: Write> {
    env: Environment,
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self::with_environment(Environment::new(), out)
    }

    pub fn with_environment(env: Environment, out: W) -> Self {
        Self { env, out }
    }

    /// Lexes, parses and evaluates `source` in a single pass.
    ///
    /// Lines printed before an error stay written to the sink.
    pub fn run(&mut self, source: &str) -> Result<Completion> {
        let mut lexer = Lexer::new(source);
        let cur_token = lexer.next_token();
        let mut executor = Executor {
            lexer,
            cur_token,
            env: &mut self.env,
            out: &mut self.out,
        };
        executor.execute()
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

/// Single-use parser/evaluator over one source text.
struct Executor<'a, W: Write> {
    lexer: Lexer,
    cur_token: Token,
    env: &'a mut Environment,
    out: &'a mut W,
}

impl<'a, W: Write> Executor<'a, W> {
    fn execute(&mut self) -> Result<Completion> {
        loop {
            match self.cur_token.kind {
                TokenKind::End => return Ok(Completion::Finished),
                TokenKind::Print => self.print_statement()?,
                TokenKind::Ident => self.assign_statement()?,
                _ => {
                    return Ok(Completion::Halted {
                        token: self.cur_token.clone(),
                    })
                }
            }
        }
    }

    fn print_statement(&mut self) -> Result<()> {
        self.eat(TokenKind::Print)?;
        self.eat(TokenKind::Lparen)?;

        let line = self.display_expression()?;
        writeln!(self.out, "{line}").context("failed to write output")?;
        self.out.flush().context("failed to flush output")?;

        self.eat(TokenKind::Rparen)?;
        self.eat(TokenKind::Semicolon)
    }

    fn assign_statement(&mut self) -> Result<()> {
        let name = self.cur_token.literal.clone();
        self.eat(TokenKind::Ident)?;
        self.eat(TokenKind::Assign)?;

        let value = self.expression()?;
        self.env.set(&name, value);

        self.eat(TokenKind::Semicolon)
    }

    fn eat(&mut self, kind: TokenKind) -> Result<()> {
        if !self.cur_token.is(kind) {
            bail!("expected {kind}, found {}", self.cur_token);
        }
        self.cur_token = self.lexer.next_token();
        Ok(())
    }
}

fn parse_number(literal: &str) -> Result<f64> {
    literal
        .parse::<f64>()
        .with_context(|| format!("invalid number literal '{literal}'"))
}
