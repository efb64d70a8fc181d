//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Program`. It uses a Pratt parser for expressions with proper
//! operator precedence and handles:
//!
//! - Statement dispatch (bindings, expression statements, blank lines)
//! - Expression parsing (prefix/infix operators, calls, grouping)
//! - Conditionals and loops whose bodies are indented blocks
//! - Non-fatal diagnostics collected over a whole pass
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling. Block
//! structure comes from token columns: a block lasts while its statements
//! start at or beyond four columns per level of nesting.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
