use std::fmt::{self, Display, Formatter};

use crate::listing::Position;

use super::tac::{Operator, Value};

/// A record that omits the result slot. Intermediate results are referred to by the
/// position of the triple that computed them, so triples must never be reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub op: Operator,
    pub arg1: TripleArg,
    /// Absent for copies.
    pub arg2: Option<TripleArg>,
}

impl Display for Triple {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.arg2 {
            Some(arg2) => write!(f, "({}, {}, {})", self.op, self.arg1, arg2),
            None => write!(f, "({}, {}, -)", self.op, self.arg1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripleArg {
    /// A variable or constant, named directly.
    Value(Value),
    /// The result of an earlier triple.
    Result(Position),
}

impl Display for TripleArg {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TripleArg::Value(value) => value.fmt(f),
            TripleArg::Result(position) => write!(f, "({})", position),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::BinOp;

    use super::*;

    #[test]
    fn references_print_in_parentheses() {
        let triple = Triple {
            op: Operator::Bin(BinOp::Add),
            arg1: TripleArg::Value(Value::Const(1)),
            arg2: Some(TripleArg::Result(Position(0))),
        };

        assert_eq!(triple.to_string(), "(+, 1, (0))");
    }
}
