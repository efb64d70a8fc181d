//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts normalized
//! source text into a stream of tokens for parsing. It handles:
//!
//! - Character-by-character scanning with one character of lookahead
//! - Recognition of keywords, identifiers, integer and string literals
//! - Single and two-character operators
//! - Indent markers, newlines and `#` comments
//! - Token position tracking for error reporting
//!
//! The lexer never fails: anything it does not recognise becomes an
//! `Illegal` token and is reported later by the parser.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
