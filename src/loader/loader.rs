use std::{fs::read_to_string, path::Path};

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::{tokenize, INDENT_WIDTH},
    parser::parser::parse,
    Position,
};

lazy_static! {
    static ref LEADING_SPACES: Regex = Regex::new(r"(?m)^(?: {4})+").unwrap();
}

/// Replaces every group of four leading spaces on a line with a tab.
/// Spaces after the first non-space character are left alone.
pub fn normalize(source: &str) -> String {
    LEADING_SPACES
        .replace_all(source, |captures: &Captures| {
            "\t".repeat(captures[0].len() / INDENT_WIDTH as usize)
        })
        .into_owned()
}

/// Reads a source file and normalizes its indentation.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();

    match read_to_string(path) {
        Ok(contents) => Ok(normalize(&contents)),
        Err(error) => Err(Error::new(
            ErrorImpl::FileRead {
                path: path.display().to_string(),
                message: error.to_string(),
            },
            Position::null(),
        )),
    }
}

/// Normalizes, tokenizes and parses a piece of source text.
///
/// Returns every statement that parsed along with the diagnostics for the
/// ones that did not.
pub fn parse_source(source: &str) -> (Program, Vec<Error>) {
    let tokens = tokenize(&normalize(source));
    let (parser, program) = parse(tokens);

    (program, parser.diagnostics().to_vec())
}

/// Loads and parses a source file. Also returns the normalized source so
/// that diagnostics can be rendered against it.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<(String, Program, Vec<Error>), Error> {
    let source = load_file(path)?;
    let (program, errors) = parse_source(&source);

    Ok((source, program, errors))
}
