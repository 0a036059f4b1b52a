//! Lexing functions for constructing a token stream.
use std::num::ParseIntError;

use log::debug;

use crate::{ast::BinOp, span::*};

use super::{char_lexer::*, error::*, tokens::*};

struct Lexer<'s> {
    lexer: CharLexer<'s>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

/// Converts source text into a token stream terminated by a single [`TokenKind::Eof`].
/// All lexical errors in the source are collected before failing.
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<LexError>> {
    Lexer::new(source).run()
}

impl<'s> Lexer<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            lexer: CharLexer::new(source),
            tokens: vec![],
            errors: vec![],
        }
    }

    fn run(mut self) -> Result<Vec<Token>, Vec<LexError>> {
        loop {
            self.lexer.skip_whitespace();
            if self.lexer.is_finished() {
                break;
            }
            self.token();
        }

        let end = Span::empty_at(self.lexer.byte_position());
        self.tokens.push(Token::new(TokenKind::Eof, end));

        if !self.errors.is_empty() {
            Err(self.errors)
        } else {
            debug!("Lexed {} tokens", self.tokens.len());
            Ok(self.tokens)
        }
    }

    /// Consumes a single token or lexical error. Must not be called at the end of the input.
    fn token(&mut self) {
        let start = self.lexer.byte_position();
        let Some(first) = self.lexer.peek() else {
            return;
        };

        let result = if first.is_ascii_digit() {
            self.integer_literal()
        } else if first.is_ascii_alphabetic() || first == '_' {
            Ok(self.identifier())
        } else {
            self.lexer.try_next();
            self.symbol(first).ok_or(ErrorType::UnknownCharacter(first))
        };

        let span = self.lexer.since(start);
        match result {
            Ok(kind) => self.tokens.push(Token::new(kind, span)),
            Err(error_type) => self.errors.push(LexError { span, error_type }),
        }
    }

    fn identifier(&mut self) -> TokenKind {
        let id = self
            .lexer
            .consume_while(|&c| c.is_ascii_alphanumeric() || c == '_');
        TokenKind::Identifier(id.to_string())
    }

    /// An identifier glued to a number (`12ab`) lexes as two tokens, which the parser rejects.
    fn integer_literal(&mut self) -> Result<TokenKind, ErrorType> {
        let number = self.lexer.consume_while(char::is_ascii_digit);

        number
            .parse()
            .map(TokenKind::Number)
            .map_err(|err: ParseIntError| ErrorType::IntegerLiteral(err.to_string()))
    }

    fn symbol(&self, ch: char) -> Option<TokenKind> {
        Some(match ch {
            '=' => TokenKind::Assign,
            '+' => TokenKind::Operator(BinOp::Add),
            '-' => TokenKind::Operator(BinOp::Subtract),
            '*' => TokenKind::Operator(BinOp::Multiply),
            '/' => TokenKind::Operator(BinOp::Divide),
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            ';' => TokenKind::End,
            _ => return None,
        })
    }
}
