//! Three-Address Code

use std::fmt::{self, Display, Formatter};

use crate::ast::BinOp;

/// A single TAC instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TacInstr {
    /// Copy a value into a name: `result = arg1`.
    Assign(Name, Value),
    /// Perform a binary operation: `result = arg1 op arg2`.
    Bin(Name, BinOp, Value, Value),
}
impl TacInstr {
    pub fn target(&self) -> &Name {
        match self {
            Self::Assign(target, _) => target,
            Self::Bin(target, _, _, _) => target,
        }
    }

    pub fn operator(&self) -> Operator {
        match self {
            Self::Assign(_, _) => Operator::Copy,
            Self::Bin(_, op, _, _) => Operator::Bin(*op),
        }
    }
}
impl Display for TacInstr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Assign(target, value) => write!(f, "{} = {}", target, value),
            Self::Bin(target, op, lhs, rhs) => {
                write!(f, "{} = {} {} {}", target, lhs, op, rhs)
            }
        }
    }
}

/// The operator column of a quadruple or triple: either a copy (`=`) or a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Copy,
    Bin(BinOp),
}
impl Display for Operator {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Operator::Copy => f.write_str("="),
            Operator::Bin(op) => op.fmt(f),
        }
    }
}

/// A TAC name. Names are symbolic addresses: either a variable from the source program,
/// or a temporary holding an intermediate value of a larger computation.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Name {
    /// A variable of the source program.
    Var(String),
    /// A generated, temporary name. Each temporary is assigned exactly once.
    Temp(usize),
}
impl Name {
    pub fn is_temp(&self) -> bool {
        matches!(self, Name::Temp(_))
    }
}
impl Display for Name {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Name::Var(name) => f.write_str(name),
            Name::Temp(temp) => write!(f, "t{}", temp),
        }
    }
}

/// A TAC value. Values are either constants, or references to names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Const(i64),
    Name(Name),
}
impl Value {
    pub fn as_name(&self) -> Option<&Name> {
        match self {
            Value::Const(_) => None,
            Value::Name(n) => Some(n),
        }
    }
}
impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Value::Const(lit) => write!(f, "{}", lit),
            Value::Name(name) => write!(f, "{}", name),
        }
    }
}
