//! Errors produced while scanning source text.
use thiserror::Error;

use crate::{error::PositionalError, span::*};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorType {
    #[error("Invalid integer literal: {0}")]
    IntegerLiteral(String),
    #[error("Unexpected character: '{0}'")]
    UnknownCharacter(char),
}

#[derive(Error, Debug)]
#[error("{error_type}")]
pub struct LexError {
    pub span: Span,
    pub error_type: ErrorType,
}

impl PositionalError for LexError {
    fn range(&self) -> Span {
        self.span
    }

    fn describe(&self) -> String {
        format!("lexical error: {}", self)
    }
}
