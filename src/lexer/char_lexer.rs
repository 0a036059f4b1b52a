use std::str::CharIndices;

use crate::span::{Bytes, Span};

/// A cursor over the source text that tracks its byte offset, so every consumed run of
/// characters can be returned as a slice of the source along with its [`Span`].
#[derive(Clone)]
pub struct CharLexer<'a> {
    source: &'a str,
    chars: CharIndices<'a>,
}

impl<'a> CharLexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices(),
        }
    }

    /// Returns [`None`] at the end of the input.
    pub fn try_next(&mut self) -> Option<char> {
        self.chars.next().map(|(_, ch)| ch)
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next().map(|(_, ch)| ch)
    }

    pub fn byte_position(&self) -> Bytes {
        Bytes::new(self.source.len() - self.chars.as_str().len())
    }

    pub fn is_finished(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Skips spaces, tabs and line breaks.
    pub fn skip_whitespace(&mut self) {
        self.consume_while(|ch| ch.is_whitespace());
    }

    /// Consumes characters while `predicate` holds, returning the consumed slice of the source.
    pub fn consume_while<P>(&mut self, mut predicate: P) -> &'a str
    where
        P: FnMut(&char) -> bool,
    {
        let start = self.byte_position();
        while self.peek().is_some_and(|ch| predicate(&ch)) {
            self.try_next();
        }
        self.since(start).lookup(self.source)
    }

    /// The span from `start` up to the current position.
    pub fn since(&self, start: Bytes) -> Span {
        Span::new(start, self.byte_position())
    }
}
