#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod loader;
pub mod macros;
pub mod parser;
pub mod repl;

extern crate regex;

/// Location of a token in the normalized source.
///
/// Lines start at 1, columns at 0. A tab counts as four columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Returns the text of the line a position points into, or `None` if the
/// position lies past the end of the source.
pub fn get_line_at_position(source: &str, position: &Position) -> Option<String> {
    if position.line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((position.line - 1) as usize)
        .map(|line| line.trim_end_matches('\r').to_string())
}


/// Renders an error with the offending source line and a caret under the
/// reported column.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnexpectedToken (expected ...)
        -> main.py
          |
        3 | if x
          | ----^
    */

    let mut result = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        result.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        result.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    result.push_str(&format!("-> {}\n", file));

    let line_text = match get_line_at_position(source, position) {
        Some(line_text) => line_text,
        None => return result,
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    result.push_str(&format!("{:>padding$}\n", "|"));
    result.push_str(&format!("{} | {}\n", line_string, expand_tabs(&line_text)));

    let arrows = position.column as usize + 1;
    result.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    result
}

// Columns count a tab as four, so the excerpt must too for the caret to line up.
fn expand_tabs(string: &str) -> String {
    string.replace('\t', "    ")
}
