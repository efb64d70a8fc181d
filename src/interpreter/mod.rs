//! Tree-walking evaluation of parsed programs.
//!
//! The interpreter runs a `Program` against an `Environment` owned by the
//! caller, so bindings survive from one program to the next (the REPL relies
//! on this). Output from `print` goes to whatever writer the interpreter was
//! given.
//!
//! Runtime failures stop evaluation and come back as the same `Error` type
//! the parser reports, positioned at the expression that failed.

pub mod environment;
pub mod interpreter;
pub mod value;
