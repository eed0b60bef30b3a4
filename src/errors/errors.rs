use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::Expectation { .. } => "Expectation",
            ErrorImpl::MissingToken { .. } => "MissingToken",
            ErrorImpl::TooDeeplyNested { .. } => "TooDeeplyNested",
            ErrorImpl::MalformedTokenRecord { .. } => "MalformedTokenRecord",
            ErrorImpl::UnknownTokenKind { .. } => "UnknownTokenKind",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::Expectation { expected, found, line, .. } => ErrorTip::Suggestion(format!(
                "Expected {} but got {} on line {}",
                expected, found, line
            )),
            ErrorImpl::MissingToken { expected } => ErrorTip::Suggestion(format!(
                "Expected {} is missing, the input ended early",
                expected
            )),
            ErrorImpl::TooDeeplyNested { limit, .. } => ErrorTip::Suggestion(format!(
                "Nesting exceeds {} rules, try splitting the expression or block",
                limit
            )),
            ErrorImpl::MalformedTokenRecord { .. } => ErrorTip::Suggestion(String::from(
                "Token records are `KIND lexeme line column`",
            )),
            ErrorImpl::UnknownTokenKind { kind, .. } => {
                ErrorTip::Suggestion(format!("`{}` is not a token kind", kind))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// The terminal kinds a parser rule would have accepted at the point of failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedKinds(pub Vec<TokenKind>);

impl ExpectedKinds {
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.0.contains(&kind)
    }
}

impl From<TokenKind> for ExpectedKinds {
    fn from(kind: TokenKind) -> Self {
        ExpectedKinds(vec![kind])
    }
}

impl From<&[TokenKind]> for ExpectedKinds {
    fn from(kinds: &[TokenKind]) -> Self {
        ExpectedKinds(kinds.to_vec())
    }
}

impl Display for ExpectedKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.as_slice() {
            [] => write!(f, "nothing"),
            [only] => write!(f, "{}", only),
            [init @ .., last] => {
                for (i, kind) in init.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", kind)?;
                }
                write!(f, " or {}", last)
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("illegal character {token:?} at line {line}")]
    UnrecognisedToken { token: String, line: u32 },
    #[error("expected {expected} but got {found} ({lexeme:?}) on line {line}")]
    Expectation {
        expected: ExpectedKinds,
        found: TokenKind,
        lexeme: String,
        line: u32,
    },
    #[error("expected {expected} is missing")]
    MissingToken { expected: ExpectedKinds },
    #[error("input nested more than {limit} rules deep at line {line}")]
    TooDeeplyNested { limit: usize, line: u32 },
    #[error("malformed token record on line {record}: {text:?}")]
    MalformedTokenRecord { record: usize, text: String },
    #[error("unknown token kind {kind:?} on line {record}")]
    UnknownTokenKind { kind: String, record: usize },
}
