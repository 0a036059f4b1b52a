//! Runs the stages in order. A failing stage stops the compilation; nothing from later
//! stages is produced.
use log::info;

use crate::{
    ast::Node,
    dag::{self, Dag, Roots},
    error::CompileError,
    il::{self, IrProgram},
    lexer::{lex, tokens::Token},
    parser::parse,
};

/// Every artifact of one successful compilation.
#[derive(Debug)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub ast: Node,
    pub ir: IrProgram,
    pub dag: Dag,
    pub roots: Roots,
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    lex(source).map_err(|errors| errors.iter().map(CompileError::from_positional).collect())
}

pub fn parse_source(source: &str) -> Result<(Vec<Token>, Node), Vec<CompileError>> {
    let tokens = tokenize(source)?;
    let ast = parse(&tokens).map_err(|err| vec![CompileError::from_positional(&err)])?;
    Ok((tokens, ast))
}

pub fn compile(source: &str) -> Result<Compilation, Vec<CompileError>> {
    let (tokens, ast) = parse_source(source)?;
    let ir = il::generate(&ast).map_err(|err| vec![CompileError::from(err)])?;
    let (dag, roots) = dag::build(&ast).map_err(|err| vec![CompileError::from(err)])?;

    info!(
        "Compiled {} tokens into {} instructions and {} DAG nodes",
        tokens.len(),
        ir.tac.len(),
        dag.len()
    );

    Ok(Compilation {
        tokens,
        ast,
        ir,
        dag,
        roots,
    })
}
