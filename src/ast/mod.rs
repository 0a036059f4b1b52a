//! Abstract Syntax Tree definitions
mod error;
mod node;

pub use error::*;
pub use node::*;
