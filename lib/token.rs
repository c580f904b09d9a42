use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Number,
    Ident,
    String,
    Unknown,

    Plus,
    Minus,
    Star,
    Slash,
    Assign,

    Semicolon,
    Comma,
    Lparen,
    Rparen,

    Print,
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Unknown => write!(f, "unknown character"),

            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Assign => write!(f, "'='"),

            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Lparen => write!(f, "'('"),
            TokenKind::Rparen => write!(f, "')'"),

            TokenKind::Print => write!(f, "print"),
            TokenKind::End => write!(f, "end of input"),
        }
    }
}

/// A lexed token: its kind plus the source text it was read from.
///
/// String tokens carry the text between the quotes, not the quotes themselves.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn end() -> Self {
        Self::new(TokenKind::End, "")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// How the token is named in diagnostics.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::End => write!(f, "end of input"),
            TokenKind::String => write!(f, "string \"{}\"", self.literal),
            _ => write!(f, "'{}'", self.literal),
        }
    }
}
