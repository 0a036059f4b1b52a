use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::{BinOp, Context, Node, UnexpectedNode},
    listing::{Listing, Position},
};

use super::{name_generator::*, quadruple::*, table, tac::*, triple::*};

/// Generates the intermediate representations of a syntax tree.
///
/// Accepts a whole program, a single assignment, or a bare expression; nested nodes must
/// follow the shape the parser produces.
pub fn generate(ast: &Node) -> Result<IrProgram, UnexpectedNode> {
    let mut generator = IrGenerator::new();
    generator.lower(ast)?;

    let program = generator.program;
    debug!("Generated {} IR instructions", program.tac.len());
    Ok(program)
}

/// The three parallel IR listings of one program. Line `i` of each listing describes the
/// same instruction.
#[derive(Debug, Default)]
pub struct IrProgram {
    pub tac: Listing<TacInstr>,
    pub quadruples: Listing<Quadruple>,
    pub triples: Listing<Triple>,
}

impl IrProgram {
    pub fn tac_lines(&self) -> Vec<String> {
        self.tac.iter().map(ToString::to_string).collect()
    }

    pub fn quadruple_table(&self) -> String {
        let rows: Vec<_> = self
            .quadruples
            .iter()
            .map(|quad| {
                [
                    quad.op.to_string(),
                    quad.arg1.to_string(),
                    optional(&quad.arg2),
                    quad.result.to_string(),
                ]
            })
            .collect();
        table::render(["op", "arg1", "arg2", "result"], &rows)
    }

    pub fn triple_table(&self) -> String {
        let rows: Vec<_> = self
            .triples
            .iter_lines()
            .map(|(index, triple)| {
                [
                    index.to_string(),
                    triple.op.to_string(),
                    triple.arg1.to_string(),
                    optional(&triple.arg2),
                ]
            })
            .collect();
        table::render(["index", "op", "arg1", "arg2"], &rows)
    }
}

fn optional<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string())
}

struct IrGenerator {
    program: IrProgram,
    name_generator: NameGenerator,
    /// The triple that computed each temporary.
    producers: HashMap<Name, Position>,
}

impl IrGenerator {
    fn new() -> Self {
        Self {
            program: IrProgram::default(),
            name_generator: NameGenerator::new(),
            producers: HashMap::new(),
        }
    }

    /// Lower any node found at the root of the tree.
    fn lower(&mut self, node: &Node) -> Result<(), UnexpectedNode> {
        match node {
            Node::Program(statements) => {
                for stmt in statements {
                    self.lower_stmt(stmt)?;
                }
            }
            Node::Assign { name, expr } => self.lower_assign(name, expr)?,
            Node::Num(_) | Node::Id(_) | Node::BinOp { .. } => {
                self.lower_expr(node)?;
            }
        }
        Ok(())
    }

    fn lower_stmt(&mut self, stmt: &Node) -> Result<(), UnexpectedNode> {
        match stmt {
            Node::Assign { name, expr } => self.lower_assign(name, expr),
            other => Err(UnexpectedNode::new(other.kind(), Context::Program)),
        }
    }

    /// Lower an assignment. A bare leaf on the right-hand side still produces a copy.
    fn lower_assign(&mut self, name: &str, expr: &Node) -> Result<(), UnexpectedNode> {
        let value = self.lower_expr(expr)?;
        self.emit(TacInstr::Assign(Name::Var(name.to_string()), value));
        Ok(())
    }

    /// Lower an expression to the value holding its result. Leaves emit no code.
    fn lower_expr(&mut self, expr: &Node) -> Result<Value, UnexpectedNode> {
        match expr {
            Node::Num(n) => Ok(Value::Const(*n)),
            Node::Id(id) => Ok(Value::Name(Name::Var(id.clone()))),
            Node::BinOp { op, lhs, rhs } => self.lower_binexpr(*op, lhs, rhs),
            Node::Program(_) | Node::Assign { .. } => {
                Err(UnexpectedNode::new(expr.kind(), Context::Expression))
            }
        }
    }

    fn lower_binexpr(&mut self, op: BinOp, lhs: &Node, rhs: &Node) -> Result<Value, UnexpectedNode> {
        let lhs = self.lower_expr(lhs)?;
        let rhs = self.lower_expr(rhs)?;

        let res_name = self.name_generator.next_temp();
        self.emit(TacInstr::Bin(res_name.clone(), op, lhs, rhs));

        Ok(Value::Name(res_name))
    }

    /// Emit an instruction in all three forms.
    fn emit(&mut self, instr: TacInstr) {
        trace!("Emit {}", instr);

        let quad = Quadruple::from(&instr);
        let triple = Triple {
            op: quad.op,
            arg1: self.triple_arg(&quad.arg1),
            arg2: quad.arg2.as_ref().map(|arg| self.triple_arg(arg)),
        };

        let position = self.program.triples.push(triple);
        if instr.target().is_temp() {
            self.producers.insert(instr.target().clone(), position);
        }
        self.program.quadruples.push(quad);
        self.program.tac.push(instr);
    }

    /// Temporaries are replaced by a reference to the triple that computed them.
    fn triple_arg(&self, value: &Value) -> TripleArg {
        match value.as_name().and_then(|name| self.producers.get(name)) {
            Some(position) => TripleArg::Result(*position),
            None => TripleArg::Value(value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{lexer::lex, parser::parse};

    use super::*;

    fn generate_source(source: &str) -> IrProgram {
        let tokens = lex(source).unwrap();
        let program = parse(&tokens).unwrap();
        generate(&program).unwrap()
    }

    macro_rules! assert_generates {
        ($source:expr, $il:expr) => {{
            let instr_lines = generate_source($source).tac_lines();

            assert_eq!(&$il[..], instr_lines, "\n\nWhen generating:\n    {}", $source)
        }};
    }

    /// Looks a triple argument up in the quadruple listing.
    fn resolve(ir: &IrProgram, arg: &TripleArg) -> Value {
        match arg {
            TripleArg::Value(value) => value.clone(),
            TripleArg::Result(position) => {
                Value::Name(ir.quadruples.iter().nth(position.0).unwrap().result.clone())
            }
        }
    }

    #[test]
    fn multiplication_is_computed_before_addition() {
        assert_generates!("a = b + c * d;", ["t1 = c * d", "t2 = b + t1", "a = t2"]);
    }

    #[test]
    fn parenthesised_addition_is_computed_first() {
        assert_generates!("a = (b + c) * d;", ["t1 = b + c", "t2 = t1 * d", "a = t2"]);
    }

    #[test]
    fn leaf_assignment_emits_a_copy() {
        assert_generates!("a = 5;\nb = a;", ["a = 5", "b = a"]);
    }

    #[test]
    fn temporaries_are_not_reset_between_statements() {
        assert_generates!(
            "a = b + c;\nx = b + c;",
            ["t1 = b + c", "a = t1", "t2 = b + c", "x = t2"]
        );
    }

    #[test]
    fn empty_program_generates_nothing() {
        let ir = generate_source("");

        assert!(ir.tac.is_empty());
        assert!(ir.quadruples.is_empty());
        assert!(ir.triples.is_empty());
    }

    #[test]
    fn quadruples_name_results_explicitly() {
        let ir = generate_source("a = b - c - d;");

        assert_eq!(
            ir.quadruple_table(),
            "op  arg1  arg2  result\n\
             -   b     c     t1\n\
             -   t1    d     t2\n\
             =   t2    -     a"
        );
    }

    #[test]
    fn triples_refer_to_earlier_results_by_index() {
        let ir = generate_source("a = b + c * d;");

        assert_eq!(
            ir.triple_table(),
            "index  op  arg1  arg2\n\
             0      *   c     d\n\
             1      +   b     (0)\n\
             2      =   (1)   -"
        );
    }

    #[test]
    fn listings_agree_line_by_line() {
        let ir = generate_source("x = (1 + y) * (1 + y) / 4;\nz = x - 2;\nw = z;");

        assert_eq!(ir.tac.len(), ir.quadruples.len());
        assert_eq!(ir.tac.len(), ir.triples.len());

        for (quad, triple) in ir.quadruples.iter().zip(ir.triples.iter()) {
            assert_eq!(quad.op, triple.op);
            assert_eq!(quad.arg1, resolve(&ir, &triple.arg1));
            assert_eq!(
                quad.arg2,
                triple.arg2.as_ref().map(|arg| resolve(&ir, arg))
            );
        }
    }

    #[test]
    fn each_temporary_is_assigned_once_and_read_later() {
        let ir = generate_source("a = (b + c) * (b - c);\nd = a / (a + 1);");

        let mut assigned = HashSet::new();
        for (position, quad) in ir.quadruples.iter_lines() {
            for arg in [Some(&quad.arg1), quad.arg2.as_ref()].into_iter().flatten() {
                if let Some(name) = arg.as_name().filter(|n| n.is_temp()) {
                    assert!(assigned.contains(name), "{} read before line {}", name, position);
                }
            }
            if quad.result.is_temp() {
                assert!(assigned.insert(quad.result.clone()), "{} reassigned", quad.result);
            }
        }
        assert_eq!(assigned.len(), 5);
    }

    #[test]
    fn bare_expression_at_root_is_lowered() {
        let expr = Node::bin(BinOp::Divide, Node::id("a"), Node::Num(2));

        assert_eq!(generate(&expr).unwrap().tac_lines(), ["t1 = a / 2"]);
    }

    #[test]
    fn program_inside_expression_is_rejected() {
        let ast = Node::Program(vec![Node::assign(
            "a",
            Node::bin(BinOp::Add, Node::Program(vec![]), Node::Num(1)),
        )]);

        assert_eq!(
            generate(&ast).unwrap_err(),
            UnexpectedNode::new(crate::ast::NodeKind::Program, Context::Expression)
        );
    }

    #[test]
    fn expression_statement_is_rejected() {
        let ast = Node::Program(vec![Node::Num(1)]);

        assert_eq!(
            generate(&ast).unwrap_err(),
            UnexpectedNode::new(crate::ast::NodeKind::Num, Context::Program)
        );
    }
}
