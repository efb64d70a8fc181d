//! Error types and error handling for the toolchain.
//!
//! This module defines the error type shared by every stage. It includes:
//!
//! - Error structures with source position information
//! - Parse diagnostics (unexpected tokens, bad literals, missing blocks)
//! - Loading and runtime evaluation failures
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
