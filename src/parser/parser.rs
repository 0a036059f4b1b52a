use log::debug;

use crate::{
    ast::{BinOp, Node},
    lexer::tokens::*,
};

use super::{
    error::*,
    parser_base::{Parser, MAX_NESTING},
};

/// Parses a token stream ending in [`TokenKind::Eof`] into a [`Node::Program`].
///
/// ```text
/// Program   → Statement* EOF
/// Statement → ID '=' Expr ';'
/// Expr      → Term (('+'|'-') Term)*
/// Term      → Factor (('*'|'/') Factor)*
/// Factor    → NUMBER | ID | '(' Expr ')'
/// ```
///
/// The first token that does not fit the grammar fails the whole parse.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    let mut parser = Parser::new(tokens);
    let program = program(&mut parser)?;
    if let Node::Program(statements) = &program {
        debug!("Parsed {} statements", statements.len());
    }
    Ok(program)
}

fn program(parser: &mut Parser) -> Result<Node, ParseError> {
    let mut statements = vec![];
    while !parser.at_eof() {
        statements.push(statement(parser)?);
    }
    Ok(Node::Program(statements))
}

fn statement(parser: &mut Parser) -> Result<Node, ParseError> {
    let name = parser.expect_identifier().add_stage(Stage::StatementStart)?;
    parser
        .expect(TokenKind::Assign)
        .add_stage(Stage::AssignOperator)?;
    let (value, _) = expr(parser)?;
    parser.expect(TokenKind::End).add_stage(Stage::StatementEnd)?;

    Ok(Node::assign(name, value))
}

/// A parsed expression together with the height of its tree.
type Parsed = (Node, usize);

fn expr(parser: &mut Parser) -> Result<Parsed, ParseError> {
    let mut lhs = term(parser)?;
    while let Some((op, token)) = parser.recognise_operator(&[BinOp::Add, BinOp::Subtract]) {
        let rhs = term(parser)?;
        lhs = fold(op, token, lhs, rhs)?;
    }
    Ok(lhs)
}

fn term(parser: &mut Parser) -> Result<Parsed, ParseError> {
    let mut lhs = factor(parser)?;
    while let Some((op, token)) = parser.recognise_operator(&[BinOp::Multiply, BinOp::Divide]) {
        let rhs = factor(parser)?;
        lhs = fold(op, token, lhs, rhs)?;
    }
    Ok(lhs)
}

/// Joins two operands under `op`, failing at `token` if the tree grows too tall.
fn fold(op: BinOp, token: &Token, lhs: Parsed, rhs: Parsed) -> Result<Parsed, ParseError> {
    let height = lhs.1.max(rhs.1) + 1;
    if height > MAX_NESTING {
        return failure(Stage::Expr, Reason::NestingTooDeep(token.clone()));
    }
    Ok((Node::bin(op, lhs.0, rhs.0), height))
}

fn factor(parser: &mut Parser) -> Result<Parsed, ParseError> {
    let token = parser.peek().ok_or(Reason::UnexpectedEndOfInput).add_stage(Stage::Expr)?;

    match &token.kind {
        TokenKind::Number(n) => {
            parser.next().add_stage(Stage::Expr)?;
            Ok((Node::Num(*n), 0))
        }
        TokenKind::Identifier(id) => {
            parser.next().add_stage(Stage::Expr)?;
            Ok((Node::id(id.clone()), 0))
        }
        TokenKind::OpenParen => {
            parser.open_paren(token).add_stage(Stage::Expr)?;
            parser.next().add_stage(Stage::Expr)?;
            let inner = expr(parser)?;
            parser
                .expect(TokenKind::CloseParen)
                .add_stage(Stage::ParenExprEnd)?;
            parser.close_paren();
            Ok(inner)
        }
        _ => failure(Stage::Expr, Reason::UnexpectedToken(token.clone())),
    }
}
