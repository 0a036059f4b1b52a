//! Errors shared by every stage of the pipeline.
use std::{
    fmt::{self, Display},
    iter,
};

use thiserror::Error;

use crate::{ast::UnexpectedNode, source_map::find_line, span::Span};

/// An error that can be traced back to a range in the source code.
pub trait PositionalError {
    fn range(&self) -> Span;
    fn describe(&self) -> String;
}

/// A compilation failure, reduced to a message and, where known, the source range it
/// refers to.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CompileError {
    message: String,
    span: Option<Span>,
}
impl CompileError {
    pub fn new(message: String, span: Option<Span>) -> Self {
        Self { message, span }
    }

    pub fn from_positional<E: PositionalError>(error: &E) -> Self {
        Self::new(error.describe(), Some(error.range()))
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Pairs the error with the source it refers to, for display.
    pub fn render<'a>(&'a self, source: &'a str) -> Diagnostic<'a> {
        Diagnostic {
            error: self,
            source,
        }
    }
}

/// Displays the offending source line with a caret marker under the error's range.
/// Errors without a range display as their message alone.
pub struct Diagnostic<'a> {
    error: &'a CompileError,
    source: &'a str,
}

impl Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(span) = self.error.span else {
            return f.write_str(&self.error.message);
        };
        let line = find_line(self.source, span.start());
        let gutter = line.line_no().to_string();
        let padding = line.column_of(span.start());
        let width = usize::from(span.length()).max(1);

        writeln!(f, "{}| {}", gutter, line.for_display())?;
        write!(
            f,
            "{}| {}{} {}",
            pad(' ', gutter.len()),
            pad(' ', padding),
            pad('^', width),
            self.error.message
        )
    }
}

impl From<UnexpectedNode> for CompileError {
    fn from(error: UnexpectedNode) -> Self {
        Self::new(format!("internal error: {}", error), None)
    }
}

fn pad(ch: char, times: usize) -> String {
    iter::repeat(ch).take(times).collect()
}
