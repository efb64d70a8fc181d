//! Command-line interface for minipy.
//!
//! Usage:
//!   minipy `<file>`            - Run a program (same as `run`)
//!   minipy run `<file>`        - Run a program
//!   minipy tokens `<file>`     - Print the token stream of a file
//!   minipy ast `<file>`        - Print the parsed program of a file
//!   minipy repl              - Start an interactive session (the default with no arguments)
//!
//! `--verbose` prints how long each stage took to stderr.

use std::{
    io,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, Subcommand};
use minipy::{
    ast::ast::Program,
    errors::errors::Error,
    format_error,
    interpreter::{environment::Environment, interpreter::evaluate},
    lexer::lexer::tokenize,
    loader::loader::load_file,
    parser::parser::parse,
    repl::repl,
};

#[derive(Parser)]
#[command(name = "minipy", version)]
#[command(about = "Run, inspect and explore minipy programs")]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    /// Print stage timings to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Program to run when no subcommand is given
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a program
    Run { file: PathBuf },
    /// Print the token stream of a file
    Tokens { file: PathBuf },
    /// Print the parsed program of a file
    Ast { file: PathBuf },
    /// Start an interactive session
    Repl,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match (args.command, args.file) {
        (Some(Command::Run { file }), _) | (None, Some(file)) => handle_run(&file, args.verbose),
        (Some(Command::Tokens { file }), _) => handle_tokens(&file, args.verbose),
        (Some(Command::Ast { file }), _) => handle_ast(&file, args.verbose),
        (Some(Command::Repl), _) | (None, None) => handle_repl(),
    }
}

fn handle_run(file: &Path, verbose: bool) -> ExitCode {
    let (source, program, diagnostics) = match load_and_parse(file, verbose) {
        Some(loaded) => loaded,
        None => return ExitCode::FAILURE,
    };
    let file_name = file.display().to_string();

    for error in &diagnostics {
        eprint!("{}", format_error(error, &source, &file_name));
    }

    let start = Instant::now();
    let result = evaluate(&program, &mut Environment::new(), io::stdout().lock());

    if verbose {
        eprintln!("Evaluated in {:?}", start.elapsed());
    }

    match result {
        Err(error) => {
            eprint!("{}", format_error(&error, &source, &file_name));
            ExitCode::FAILURE
        }
        Ok(_) if !diagnostics.is_empty() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
    }
}

fn handle_tokens(file: &Path, verbose: bool) -> ExitCode {
    let source = match load_file(file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let tokens = tokenize(&source);

    if verbose {
        eprintln!("Tokenized in {:?}", start.elapsed());
    }

    for token in &tokens {
        println!("{}", token.debug());
    }

    ExitCode::SUCCESS
}

fn handle_ast(file: &Path, verbose: bool) -> ExitCode {
    let (source, program, diagnostics) = match load_and_parse(file, verbose) {
        Some(loaded) => loaded,
        None => return ExitCode::FAILURE,
    };
    let file_name = file.display().to_string();

    for error in &diagnostics {
        eprint!("{}", format_error(error, &source, &file_name));
    }
    println!("{}", program);

    if diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn handle_repl() -> ExitCode {
    match repl::run(io::stdin().lock(), io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

/// Loads, tokenizes and parses a file, reporting stage timings when asked.
/// A file that cannot be read is reported here and yields `None`.
fn load_and_parse(file: &Path, verbose: bool) -> Option<(String, Program, Vec<Error>)> {
    let start = Instant::now();

    let source = match load_file(file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: {}", error);
            return None;
        }
    };

    let tokens = tokenize(&source);
    if verbose {
        eprintln!("Tokenized in {:?}", start.elapsed());
    }

    let parse_start = Instant::now();
    let (parser, program) = parse(tokens);
    if verbose {
        eprintln!("Parsed in {:?}", parse_start.elapsed());
    }

    Some((source, program, parser.diagnostics().to_vec()))
}
