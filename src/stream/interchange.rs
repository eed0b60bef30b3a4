//! Plain-text token interchange.
//!
//! One token per line as whitespace-separated `KIND lexeme line column`,
//! terminated by the sentinel record `EOF EOF EOF EOF`.

use std::{io, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

pub const SENTINEL: &str = "EOF EOF EOF EOF";

pub fn write_tokens<W: io::Write>(tokens: &[Token], mut out: W) -> io::Result<()> {
    for token in tokens.iter().filter(|token| token.kind != TokenKind::EOF) {
        writeln!(out, "{} {} {} {}", token.kind, token.value, token.line(), token.column())?;
    }
    writeln!(out, "{}", SENTINEL)?;
    out.flush()
}

/// Reads tokens back from the interchange format.
///
/// Comment records are dropped before their fields are counted, since a
/// comment's lexeme may contain spaces. Reading stops at the first `EOF`
/// record or at the end of the input.
pub fn read_tokens(input: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let file = Rc::new(file.unwrap_or_else(|| String::from("tokens")));
    let mut tokens = Vec::new();

    for (index, text) in input.lines().enumerate() {
        let record = index + 1;
        let fields: Vec<&str> = text.split_whitespace().collect();

        let Some(&kind_name) = fields.first() else {
            continue;
        };

        if kind_name == TokenKind::Comment.name() {
            continue;
        }
        if kind_name == TokenKind::EOF.name() {
            break;
        }

        let malformed = || {
            Error::new(
                ErrorImpl::MalformedTokenRecord { record, text: text.to_string() },
                Position::new(record as u32, 1, Rc::clone(&file)),
            )
        };

        let [_, lexeme, line, column] = fields.as_slice() else {
            return Err(malformed());
        };

        let kind = TokenKind::from_name(kind_name).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnknownTokenKind { kind: kind_name.to_string(), record },
                Position::new(record as u32, 1, Rc::clone(&file)),
            )
        })?;

        let line: u32 = line.parse().map_err(|_| malformed())?;
        let column: u32 = column.parse().map_err(|_| malformed())?;
        let width = lexeme.chars().count() as u32;

        tokens.push(MK_TOKEN!(
            kind,
            lexeme.to_string(),
            Span {
                start: Position::new(line, column, Rc::clone(&file)),
                end: Position::new(line, column + width, Rc::clone(&file)),
            }
        ));
    }

    Ok(tokens)
}
