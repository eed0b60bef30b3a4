//! Lexical analysis for Wumpus World programs.
//!
//! This module turns source text into a flat list of tokens. It handles:
//!
//! - Longest-match tokenization over an ordered table of regex patterns
//! - Reserved words, directions and agent actions through `RESERVED_LOOKUP`
//! - Line and column tracking for diagnostics
//! - `$...$` comments and whitespace
//! - Best-effort recovery from characters that match no rule

pub mod lexer;
pub mod tokens;
