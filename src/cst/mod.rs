//! Concrete syntax tree produced by the parser.
//!
//! Unlike an AST the tree is lossless: every terminal the parser consumed,
//! punctuation included, appears as a leaf in source order.

pub mod cst;
pub mod printer;
