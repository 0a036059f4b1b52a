//! Contains the [`Bytes`] and [`Span`] types, which describe source code positions.
use std::{
    fmt::{self, Debug, Display},
    ops::{Add, Sub},
};

/// A byte offset into the source text.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct Bytes(usize);
impl Bytes {
    pub fn new(pos: usize) -> Self {
        Self(pos)
    }
}
impl Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<Bytes> for usize {
    fn from(bytes: Bytes) -> Self {
        bytes.0
    }
}
impl Add<usize> for Bytes {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}
impl Sub<Bytes> for Bytes {
    type Output = Self;

    fn sub(self, rhs: Bytes) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

/// A half-open byte range in the source text.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: Bytes,
    end: Bytes,
}
impl Span {
    pub fn new(start: Bytes, end: Bytes) -> Self {
        Self { start, end }
    }

    /// A zero-length span at `position`.
    pub fn empty_at(position: Bytes) -> Self {
        Self::new(position, position)
    }

    pub fn length(&self) -> Bytes {
        self.end - self.start
    }

    pub fn start(&self) -> Bytes {
        self.start
    }

    pub fn lookup<'t>(&self, target: &'t str) -> &'t str {
        &target[self.start.into()..self.end.into()]
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
