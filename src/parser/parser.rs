//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement parsing.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! The tables are filled once when the parser is created and only read
//! afterwards. All cursor state lives in the parser instance, so any number
//! of independent parses can run over the life of a process.
//!
//! The cursor always rests on the last token of whatever was just parsed;
//! `parse` steps past it before starting the next statement.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the lookup tables for parsing
/// expressions. It tracks the current position in the token stream, the
/// indentation depth of the block being parsed, and every diagnostic
/// recorded so far.
pub struct Parser {
    /// The list of tokens to parse, always ending in `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Number of blocks enclosing the current token
    indent_level: u32,
    /// Diagnostics recorded so far, in the order they were found
    errors: Vec<Error>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser instance with its lookup tables filled in.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    ///
    /// # Panics
    ///
    /// Panics when `tokens` is empty; there is nothing a parse could mean.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let last = match tokens.last() {
            Some(last) => last,
            None => panic!("no tokens to parse"),
        };

        if last.kind != TokenKind::EOF {
            let position = last.position;
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), position));
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            indent_level: 0,
            errors: vec![],
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token after the current one; at the end this is `EOF` again.
    pub fn peek_token(&self) -> &Token {
        self.tokens
            .get(self.pos + 1)
            .unwrap_or(&self.tokens[self.tokens.len() - 1])
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token().kind
    }

    /// Moves to the next token. Never moves past `EOF`.
    pub fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    /// Moves back one token.
    pub fn retreat(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
        }
    }

    /// Advances onto the next token if it has the expected kind; otherwise
    /// records a diagnostic and stays put.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// Returns true if the next token matched and is now the current token.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> bool {
        if self.peek_token_kind() == expected_kind {
            self.advance();
            true
        } else {
            let found = self.peek_token();
            let (found_kind, position) = (found.kind, found.position);
            self.push_error(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: found_kind,
                },
                position,
            );
            false
        }
    }

    /// Checks whether the cursor has reached the end of the stream.
    pub fn at_end(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// True when the cursor sits on a newline or indent marker, which is
    /// where a block leaves it once the block has ended.
    pub fn at_line_boundary(&self) -> bool {
        matches!(
            self.current_token_kind(),
            TokenKind::Newline | TokenKind::Indent
        )
    }

    /// Records a diagnostic; parsing carries on regardless.
    pub fn push_error(&mut self, error: ErrorImpl, position: Position) {
        self.errors.push(Error::new(error, position));
    }

    /// Returns the diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the diagnostics recorded so far as messages.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Returns the number of blocks enclosing the current token.
    pub fn indent_level(&self) -> u32 {
        self.indent_level
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Binding power of the current token, `Lowest` for non-operators.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current_token_kind())
    }

    /// Binding power of the next token, `Lowest` for non-operators.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.peek_token_kind())
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix operator
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().position
    }
}

/// Parses a stream of tokens into a program.
///
/// This is the main entry point for parsing. It creates a parser instance
/// and parses statements until EOF. Statements that fail to parse are left
/// out of the program; the reasons are available from `Parser::errors`.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (holding the diagnostics)
/// - The program made of every statement that parsed
///
/// # Panics
///
/// Panics when `tokens` is empty.
pub fn parse(tokens: Vec<Token>) -> (Parser, Program) {
    let mut parser = Parser::new(tokens);
    let mut statements = vec![];

    while !parser.at_end() {
        if let Some(stmt) = parse_stmt(&mut parser) {
            statements.push(stmt);
        }
        parser.advance();
    }

    (parser, Program { statements })
}
