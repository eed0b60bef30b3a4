//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while lexing, re-reading token
//! files and parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each stage
//! - Error names and suggestions used by the error renderer

pub mod errors;

#[cfg(test)]
mod tests;
