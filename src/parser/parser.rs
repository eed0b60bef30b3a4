//! Parser state and entry points.
//!
//! The parser is a hand-written LL(1) recursive descent: every rule picks its
//! production from the kind of the single current token, there is no
//! backtracking, and the first grammar violation aborts the parse.
//!
//! It maintains lookup tables for:
//! - Declaration handlers (`const`, `function`)
//! - Statement handlers (one per statement-starting terminal)

use std::collections::HashMap;

use tracing::trace;

use crate::{
    cst::cst::{CstNode, Rule},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    stream::stream::TokenStream,
    Position,
};

use super::lookups::{create_token_lookups, rule_handler, DeclLookup, RuleHandler, StmtLookup};

pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// How many rules may be open at once before the parse is abandoned.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The tokens left to parse
    stream: TokenStream,
    /// Number of rules currently open
    depth: usize,
    max_depth: usize,
    /// Lookup table for declaration handlers
    decl_lookup: DeclLookup,
    /// Lookup table for statement handlers
    stmt_lookup: StmtLookup,
}

impl Parser {
    pub fn new(stream: TokenStream) -> Self {
        Parser::with_options(stream, ParserOptions::default())
    }

    pub fn with_options(stream: TokenStream, options: ParserOptions) -> Self {
        let mut parser = Parser {
            stream,
            depth: 0,
            max_depth: options.max_depth,
            decl_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.stream.peek()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.stream.peek_kind()
    }

    pub fn at_one_of(&self, kinds: &[TokenKind]) -> bool {
        self.current_token().is_one_of(kinds)
    }

    /// Consumes the current token.
    pub fn advance(&mut self) -> Token {
        self.stream.pop()
    }

    /// Consumes the current token as a leaf, whatever its kind.
    pub fn leaf(&mut self) -> CstNode {
        CstNode::Leaf(self.advance())
    }

    /// Builds the error for a current token that is not one of `expected`.
    ///
    /// Running into the end of input is a `MissingToken`, anything else an
    /// `Expectation`.
    pub fn mismatch(&self, expected: &[TokenKind]) -> Error {
        let token = self.current_token();

        if token.kind == TokenKind::EOF {
            Error::new(
                ErrorImpl::MissingToken { expected: expected.into() },
                token.span.start.clone(),
            )
        } else {
            Error::new(
                ErrorImpl::Expectation {
                    expected: expected.into(),
                    found: token.kind,
                    lexeme: token.value.clone(),
                    line: token.line(),
                },
                token.span.start.clone(),
            )
        }
    }

    /// Consumes a terminal of the given kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<CstNode, Error> {
        self.expect_one_of(&[expected_kind])
    }

    /// Consumes a terminal whose kind is any of `kinds`.
    pub fn expect_one_of(&mut self, kinds: &[TokenKind]) -> Result<CstNode, Error> {
        if self.at_one_of(kinds) {
            Ok(self.leaf())
        } else {
            Err(self.mismatch(kinds))
        }
    }

    /// Opens a branch for `rule`, letting `build` push its children.
    ///
    /// Fails with `TooDeeplyNested` instead of descending past the configured
    /// depth.
    pub fn rule<F>(&mut self, rule: Rule, build: F) -> Result<CstNode, Error>
    where
        F: FnOnce(&mut Parser, &mut Vec<CstNode>) -> Result<(), Error>,
    {
        if self.depth >= self.max_depth {
            return Err(Error::new(
                ErrorImpl::TooDeeplyNested {
                    limit: self.max_depth,
                    line: self.current_token().line(),
                },
                self.get_position(),
            ));
        }

        trace!("{} at {} (depth {})", rule, self.current_token(), self.depth);

        self.depth += 1;
        let mut children = Vec::new();
        let result = build(self, &mut children);
        self.depth -= 1;

        result.map(|_| CstNode::branch(rule, children))
    }

    /// Returns a reference to the declaration lookup table.
    pub fn get_decl_lookup(&self) -> &DeclLookup {
        &self.decl_lookup
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a declaration handler for a token.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: RuleHandler) {
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: RuleHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Parses `rule` as the start symbol and requires the input to end there.
    pub fn parse_start(&mut self, rule: Rule) -> Result<CstNode, Error> {
        let tree = rule_handler(rule)(self)?;

        if !self.stream.is_exhausted() {
            return Err(self.mismatch(&[TokenKind::EOF]));
        }

        Ok(tree)
    }
}

/// Parses a complete program.
///
/// # Arguments
///
/// * `tokens` - Tokens straight from the lexer or the interchange reader;
///   comments are dropped and an end-of-input marker is supplied
///
/// # Returns
///
/// The `program` node, or the first grammar violation.
pub fn parse(tokens: Vec<Token>) -> Result<CstNode, Error> {
    parse_rule(tokens, Rule::Program, ParserOptions::default())
}

/// Parses the tokens as a single `rule` rather than a whole program.
pub fn parse_rule(tokens: Vec<Token>, rule: Rule, options: ParserOptions) -> Result<CstNode, Error> {
    let mut parser = Parser::with_options(TokenStream::new(tokens), options);
    parser.parse_start(rule)
}
