//! Parser module for building the concrete syntax tree.
//!
//! This module contains a recursive-descent parser with one function per
//! grammar rule. It consumes a `TokenStream` and handles:
//!
//! - Declarations (`const`, `function`)
//! - The `init` block and its entity placements
//! - The `play` block, nested blocks and statements
//! - Conditions and arithmetic expressions
//!
//! Declaration and statement productions are chosen through lookup tables
//! keyed by the current token kind.

pub mod decl;
pub mod expr;
pub mod init;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
