use std::fmt::{self, Display, Formatter};

use super::tac::{Name, Operator, TacInstr, Value};

/// A four-field record naming the operator, both operands and the result explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadruple {
    pub op: Operator,
    pub arg1: Value,
    /// Absent for copies.
    pub arg2: Option<Value>,
    pub result: Name,
}

impl From<&TacInstr> for Quadruple {
    fn from(instr: &TacInstr) -> Self {
        let (arg1, arg2) = match instr {
            TacInstr::Assign(_, value) => (value.clone(), None),
            TacInstr::Bin(_, _, lhs, rhs) => (lhs.clone(), Some(rhs.clone())),
        };
        Self {
            op: instr.operator(),
            arg1,
            arg2,
            result: instr.target().clone(),
        }
    }
}

impl Display for Quadruple {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.arg2 {
            Some(arg2) => write!(f, "({}, {}, {}, {})", self.op, self.arg1, arg2, self.result),
            None => write!(f, "({}, {}, -, {})", self.op, self.arg1, self.result),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::BinOp;

    use super::*;

    #[test]
    fn copy_has_no_second_argument() {
        let quad = Quadruple::from(&TacInstr::Assign(Name::Var("a".into()), Value::Const(5)));

        assert_eq!(quad.arg2, None);
        assert_eq!(quad.to_string(), "(=, 5, -, a)");
    }

    #[test]
    fn binary_operation_keeps_operand_order() {
        let instr = TacInstr::Bin(
            Name::Temp(1),
            BinOp::Subtract,
            Value::Name(Name::Var("b".into())),
            Value::Const(2),
        );

        assert_eq!(Quadruple::from(&instr).to_string(), "(-, b, 2, t1)");
    }
}
