use std::rc::Rc;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

/// A lookahead-1 queue over a token list.
///
/// Comments never reach the consumer and the stream always ends with exactly
/// one `EOF`. Once that token is reached, `peek` and `pop` keep returning it.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens: Vec<Token> = tokens
            .into_iter()
            .take_while(|token| token.kind != TokenKind::EOF)
            .filter(|token| token.kind != TokenKind::Comment)
            .collect();

        let end = match tokens.last() {
            Some(last) => last.span.end.clone(),
            None => Position::new(1, 1, Rc::new(String::from("shell"))),
        };

        tokens.push(MK_TOKEN!(
            TokenKind::EOF,
            String::from("EOF"),
            Span { start: end.clone(), end }
        ));

        TokenStream { tokens, pos: 0 }
    }

    /// Returns the current token without consuming it.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Returns the current token and moves past it, unless it is `EOF`.
    pub fn pop(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn is_exhausted(&self) -> bool {
        self.peek_kind() == TokenKind::EOF
    }

    /// Number of tokens not yet consumed, the trailing `EOF` excluded.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - 1 - self.pos
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}
