//! Converts a token stream into an abstract syntax tree.
mod error;
mod parser;
mod parser_base;

pub use parser::parse;
