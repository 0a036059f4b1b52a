//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

use crate::{ast::BinOp, span::Span};

#[derive(Clone, Debug)]
pub struct Token {
    pub source: Span,
    pub kind: TokenKind,
}
impl Token {
    pub fn new(kind: TokenKind, source: Span) -> Self {
        Self { source, kind }
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            TokenKind::Eof => f.write_str("end of input"),
            kind => write!(f, "{} '{}'", kind.class(), kind.lexeme()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Number(i64),
    Identifier(String),
    Assign,
    Operator(BinOp),
    OpenParen,
    CloseParen,
    /// The `;` statement terminator.
    End,
    /// Marks the end of the token stream. Always the last token.
    Eof,
}
impl TokenKind {
    /// The lexical class of the token, as shown in token listings.
    pub fn class(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "NUMBER",
            TokenKind::Identifier(_) => "ID",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Operator(_) => "OP",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::End => "END",
            TokenKind::Eof => "EOF",
        }
    }

    /// The source text the token stands for. Empty for [`TokenKind::Eof`].
    pub fn lexeme(&self) -> String {
        match self {
            TokenKind::Number(n) => n.to_string(),
            TokenKind::Identifier(id) => id.clone(),
            TokenKind::Assign => "=".to_string(),
            TokenKind::Operator(op) => op.to_string(),
            TokenKind::OpenParen => "(".to_string(),
            TokenKind::CloseParen => ")".to_string(),
            TokenKind::End => ";".to_string(),
            TokenKind::Eof => String::new(),
        }
    }
}
impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Eof => f.write_str(self.class()),
            _ => write!(f, "{} {}", self.class(), self.lexeme()),
        }
    }
}
