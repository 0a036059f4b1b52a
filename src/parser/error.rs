//! Error handling for parsing.
use std::fmt;

use thiserror::Error;

use crate::{
    error::PositionalError,
    lexer::tokens::Token,
    span::{Bytes, Span},
};

use super::parser_base::MAX_NESTING;

/// A parsing error, indicating both the production the parser was in the middle of
/// and the cause for the error.
#[derive(Debug, Error)]
#[error("{}", summarise(.stage, .reason))]
pub struct ParseError {
    stage: Stage,
    reason: Reason,
}

impl ParseError {
    pub fn new(stage: Stage, reason: Reason) -> Self {
        Self { stage, reason }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn reason(&self) -> &Reason {
        &self.reason
    }
}

impl PositionalError for ParseError {
    fn range(&self) -> Span {
        match &self.reason {
            Reason::UnexpectedToken(tok) | Reason::NestingTooDeep(tok) => tok.source,
            // Only reachable for token streams that lack an end marker, which carry no position.
            Reason::UnexpectedEndOfInput => Span::empty_at(Bytes::new(0)),
        }
    }

    fn describe(&self) -> String {
        format!("syntax error: {}", summarise(&self.stage(), self.reason()))
    }
}

fn summarise(stage: &Stage, reason: &Reason) -> String {
    match reason {
        Reason::NestingTooDeep(_) => reason.to_string(),
        _ => format!("{} (expected {})", reason, stage),
    }
}

#[derive(Debug, Error)]
pub enum Reason {
    #[error("unexpected {0}")]
    UnexpectedToken(Token),
    #[error("token stream ended without an end marker")]
    UnexpectedEndOfInput,
    #[error("{0} nests expressions more than {limit} levels deep", limit = MAX_NESTING)]
    NestingTooDeep(Token),
}

/// The grammar production that failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The identifier that starts an assignment statement.
    StatementStart,
    /// The `=` following the assignment target.
    AssignOperator,
    /// The start of an expression (a number, identifier, or parenthesised expression).
    Expr,
    /// The end of a parenthesised expression.
    ParenExprEnd,
    /// The `;` ending a statement.
    StatementEnd,
}
impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Stage::StatementStart => "an identifier to start a statement",
            Stage::AssignOperator => "'=' after the assignment target",
            Stage::Expr => "an expression",
            Stage::ParenExprEnd => "')' to close the parenthesised expression",
            Stage::StatementEnd => "';' to end the statement",
        })
    }
}

pub trait AddStage {
    type Annotated;

    fn add_stage(self, stage: Stage) -> Self::Annotated;
}

impl<O> AddStage for Result<O, Reason> {
    type Annotated = Result<O, ParseError>;

    fn add_stage(self, stage: Stage) -> Self::Annotated {
        self.map_err(|reason| ParseError { stage, reason })
    }
}

pub fn failure<R>(stage: Stage, reason: Reason) -> Result<R, ParseError> {
    Err(ParseError::new(stage, reason))
}
