use super::error::*;
use crate::{ast::BinOp, lexer::tokens::*};

/// How deeply expressions may nest, counting both open parentheses and the height of the
/// expression tree. Every later stage walks the tree recursively, so this also bounds them.
pub const MAX_NESTING: usize = 256;

/// A cursor over a token slice with one token of lookahead.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    open_parens: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            open_parens: 0,
        }
    }

    pub fn next(&mut self) -> Result<&'a Token, Reason> {
        let token = self
            .tokens
            .get(self.position)
            .ok_or(Reason::UnexpectedEndOfInput)?;
        self.position += 1;
        Ok(token)
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// Tries to read a token of the given kind. If the token does not match, the parser is not
    /// advanced, and an error is returned instead.
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, Reason> {
        let next = self.peek().ok_or(Reason::UnexpectedEndOfInput)?;

        if next.kind == kind {
            self.next()
        } else {
            Err(Reason::UnexpectedToken(next.clone()))
        }
    }

    pub fn expect_identifier(&mut self) -> Result<String, Reason> {
        let next = self.peek().ok_or(Reason::UnexpectedEndOfInput)?;

        match &next.kind {
            TokenKind::Identifier(id) => {
                self.position += 1;
                Ok(id.clone())
            }
            _ => Err(Reason::UnexpectedToken(next.clone())),
        }
    }

    /// Consumes the next token if it is one of the given operators.
    pub fn recognise_operator(&mut self, operators: &[BinOp]) -> Option<(BinOp, &'a Token)> {
        let token = self.peek()?;
        match &token.kind {
            TokenKind::Operator(op) if operators.contains(op) => {
                self.position += 1;
                Some((*op, token))
            }
            _ => None,
        }
    }

    /// Records that `open` starts a parenthesised expression.
    pub fn open_paren(&mut self, open: &Token) -> Result<(), Reason> {
        if self.open_parens == MAX_NESTING {
            return Err(Reason::NestingTooDeep(open.clone()));
        }
        self.open_parens += 1;
        Ok(())
    }

    pub fn close_paren(&mut self) {
        self.open_parens -= 1;
    }

    pub fn at_eof(&self) -> bool {
        matches!(self.peek(), Some(Token { kind: TokenKind::Eof, .. }))
    }
}
