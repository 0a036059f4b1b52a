//! Generic logic for positional code listings (TAC, quadruples, triples).
mod position;

use std::slice::Iter;

pub use position::Position;

/// An append-only sequence of lines, addressed by [`Position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<T> {
    lines: Vec<T>,
}

impl<T> Listing<T> {
    pub fn new() -> Self {
        Self { lines: vec![] }
    }

    /// Appends a line, returning the position it was stored at.
    pub fn push(&mut self, line: T) -> Position {
        self.lines.push(line);
        Position(self.lines.len() - 1)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.lines.iter()
    }

    pub fn iter_lines(&self) -> LinesIter<'_, T> {
        LinesIter {
            inner: self.lines.iter(),
            position: Position(0),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LinesIter<'item, T> {
    inner: Iter<'item, T>,
    position: Position,
}

impl<'item, T> Iterator for LinesIter<'item, T> {
    type Item = (Position, &'item T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|v| {
            let current = self.position;
            self.position = current + 1;
            (current, v)
        })
    }
}
