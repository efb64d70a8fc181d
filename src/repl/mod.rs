//! Interactive read-evaluate-print loop.
//!
//! Each line is parsed on its own and evaluated against one environment that
//! lives as long as the loop does.

pub mod repl;
