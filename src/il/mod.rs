//! Intermediate code generation: three-address code, quadruples and triples.

mod generator;
mod name_generator;
mod quadruple;
mod table;
mod tac;
mod triple;

pub use generator::{generate, IrProgram};
