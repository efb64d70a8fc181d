use std::io::{self, BufRead, Write};

use crate::{
    interpreter::{environment::Environment, interpreter::evaluate, value::Value},
    loader::loader::parse_source,
};

pub const PROMPT: &str = ">>> ";

/// Runs the loop until `input` is exhausted.
///
/// A line with diagnostics is reported (each diagnostic indented by a tab)
/// and skipped. Otherwise the parsed program is echoed back, evaluated, and
/// its value printed unless it is `None`. Runtime errors are reported the
/// same way as diagnostics and do not end the loop.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut environment = Environment::new();
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let (program, errors) = parse_source(&line);
        if !errors.is_empty() {
            for error in &errors {
                writeln!(output, "\t{}", error)?;
            }
            continue;
        }

        if program.is_empty() {
            continue;
        }
        writeln!(output, "{}", program)?;

        match evaluate(&program, &mut environment, &mut output) {
            Ok(Value::None) => {}
            Ok(value) => writeln!(output, "{}", value)?,
            Err(error) => writeln!(output, "\t{}", error)?,
        }
    }

    writeln!(output)
}
