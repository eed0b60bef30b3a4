//! Token stream handed to the parser.
//!
//! - `stream` wraps a token list as a lookahead-1 queue that ends in a
//!   synthetic end-of-input token
//! - `interchange` writes and re-reads the line-per-token text format that
//!   the `lex` command produces

pub mod interchange;
pub mod stream;
