use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer<'_>, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored; the longest match wins and ties go to the
    // earlier entry.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[A-Za-z][A-Za-z0-9_]{0,15}").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Integer) },
        RegexPattern { regex: Regex::new(r"^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\$[^$\n]*\$").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comment) },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new(r"^\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new(r"^\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
        RegexPattern { regex: Regex::new(r"^\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket) },
        RegexPattern { regex: Regex::new(r"^\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket) },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new(r"^(==|!=|<=|>=|<|>)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comparison) },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus) },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Multiply) },
        RegexPattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Divide) },
    ];
}

pub struct Lexer<'src> {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    source: &'src str,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, file: Option<String>) -> Lexer<'src> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            errors: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
            file: file_name,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    /// Moves past `text`, keeping the line and column counters in step.
    pub fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += text.len();
    }

    /// Pushes a token for `matched` at the current position and moves past it.
    pub fn emit(&mut self, kind: TokenKind, matched: &str) {
        let start = self.position();
        self.advance(matched);
        let end = self.position();

        self.tokens.push(MK_TOKEN!(kind, String::from(matched), Span { start, end }));
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn unrecognised(&mut self) {
        let Some(ch) = self.remainder().chars().next() else {
            return;
        };

        warn!("Illegal character '{}' at line {}", ch, self.line);
        self.errors.push(Error::new(
            ErrorImpl::UnrecognisedToken { token: ch.to_string(), line: self.line },
            self.position(),
        ));

        let mut buffer = [0; 4];
        self.advance(ch.encode_utf8(&mut buffer));
    }
}

fn skip_handler(lexer: &mut Lexer<'_>, matched: &str) {
    lexer.advance(matched);
}

fn symbol_handler(lexer: &mut Lexer<'_>, matched: &str) {
    let kind = RESERVED_LOOKUP.get(matched).copied().unwrap_or(TokenKind::Identifier);
    lexer.emit(kind, matched);
}

/// Tokenizes `source` on a best-effort basis.
///
/// Characters that match no rule are reported and skipped, so tokenizing
/// always runs to the end of the input. The returned tokens keep comments and
/// carry no end-of-input marker; `TokenStream` takes care of both.
pub fn tokenize(source: &str, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let mut best: Option<(&RegexPattern, usize)> = None;

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(remainder) {
                let len = found.end();
                if len > 0 && best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((pattern, len));
                }
            }
        }

        match best {
            Some((pattern, len)) => (pattern.handler)(&mut lex, &remainder[..len]),
            None => lex.unrecognised(),
        }
    }

    debug!(
        "tokenized {}: {} tokens, {} errors",
        lex.file,
        lex.tokens.len(),
        lex.errors.len()
    );

    (lex.tokens, lex.errors)
}
