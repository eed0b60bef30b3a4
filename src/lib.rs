#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod cst;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod stream;

extern crate regex;

/// A 1-based line/column location inside a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}


/// Renders an error the way the command line reports it.
///
/// When the source text is available the offending line is echoed with a
/// caret under the reported column:
///
/// ```text
/// Error: Expectation (Expected RPAREN but got LBRACE on line 3)
/// -> hunt.wump:3:14
///   |
/// 3 | while(x < 3 {
///   | -----------^
/// ```
pub fn format_error(error: &Error, source: Option<&str>) -> String {
    let mut out = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}:{}:{}", position.file, position.line, position.column);

    let Some(line_text) = source.and_then(|source| get_line(source, position.line)) else {
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{:>padding$}", "|");
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

pub fn display_error(error: &Error, source: Option<&str>) {
    eprint!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}
