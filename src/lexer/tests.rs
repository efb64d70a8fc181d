//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers, and the boundary between them
//! - Integer and string literals
//! - Operators and punctuation
//! - Newlines, indent markers and comments
//! - Source positions
//! - Illegal input

use proptest::prelude::*;

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("if elif else while for in print int str and or");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::If,
            TokenKind::Elif,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::For,
            TokenKind::In,
            TokenKind::Print,
            TokenKind::Int,
            TokenKind::Str,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_keyword_prefix_stays_identifier() {
    let tokens = tokenize("iffy");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "iffy");
}

#[test]
fn test_keywords_with_suffixes() {
    let tokens = tokenize("if1 printer orange else_ in2");

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Identifier, "{}", token.value);
    }
    assert_eq!(tokens[0].value, "if1");
    assert_eq!(tokens[1].value, "printer");
    assert_eq!(tokens[2].value, "orange");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 100 9876543210");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "100");
    assert_eq!(tokens[3].value, "9876543210");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_number_followed_by_letters_splits() {
    let tokens = tokenize("12ab");

    assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Identifier, TokenKind::EOF]);
    assert_eq!(tokens[0].value, "12");
    assert_eq!(tokens[1].value, "ab");
    assert_eq!(tokens[1].position.column, 2);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_strings_keep_backslashes() {
    let tokens = tokenize(r#""a\nb""#);

    assert_eq!(tokens[0].value, "a\\nb");
}

#[test]
fn test_unterminated_string_is_illegal() {
    let tokens = tokenize("x = \"abc\ny = 1");

    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].value, "\"abc");
    assert_eq!(tokens[2].position.line, 1);
    assert_eq!(tokens[2].position.column, 4);

    // Lexing resumes on the next line.
    assert_eq!(tokens[3].kind, TokenKind::Newline);
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "y");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - * / % ^ = ! < >");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Caret,
            TokenKind::Assignment,
            TokenKind::Not,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_two_character_operators() {
    let tokens = tokenize("== != <= >= += -= *= /= %= ^=");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::PercentEquals,
            TokenKind::CaretEquals,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[1].value, "!=");
}

#[test]
fn test_two_character_operator_advances_column() {
    let tokens = tokenize("a==b");

    assert_eq!(tokens[1].kind, TokenKind::Equals);
    assert_eq!(tokens[1].position.column, 1);
    assert_eq!(tokens[2].value, "b");
    assert_eq!(tokens[2].position.column, 3);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("f(a, b):");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::Colon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_no_whitespace() {
    let tokens = tokenize("x=1+2");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_indented_block() {
    let tokens = tokenize("if x < 1:\n\ty = 2\n");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::If,
            TokenKind::Identifier,
            TokenKind::Less,
            TokenKind::Number,
            TokenKind::Colon,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Newline,
            TokenKind::EOF,
        ]
    );

    // The tab is worth one indentation level of columns.
    assert_eq!(tokens[6].position.line, 2);
    assert_eq!(tokens[6].position.column, 0);
    assert_eq!(tokens[7].position.column, 4);
}

#[test]
fn test_nested_indentation_columns() {
    let tokens = tokenize("\t\tz");

    assert_eq!(tokens[0].kind, TokenKind::Indent);
    assert_eq!(tokens[1].kind, TokenKind::Indent);
    assert_eq!(tokens[2].position.column, 8);
}

#[test]
fn test_tab_ends_word() {
    let tokens = tokenize("a\tb");

    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].kind, TokenKind::Indent);
    assert_eq!(tokens[2].value, "b");
}

#[test]
fn test_positions_track_lines() {
    let tokens = tokenize("a = 1\nbc = 22");

    assert_eq!((tokens[0].position.line, tokens[0].position.column), (1, 0));
    assert_eq!((tokens[2].position.line, tokens[2].position.column), (1, 4));
    assert_eq!((tokens[3].position.line, tokens[3].position.column), (1, 5));
    assert_eq!((tokens[4].position.line, tokens[4].position.column), (2, 0));
    assert_eq!((tokens[6].position.line, tokens[6].position.column), (2, 5));
    assert_eq!(tokens[6].value, "22");
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("x = 1 # the answer\n# whole line\ny");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[5].position.line, 3);
}

#[test]
fn test_illegal_characters() {
    let tokens = tokenize("a @ b $");

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[1].position.column, 2);
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "$");
}

#[test]
fn test_empty_input() {
    let tokens = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_debug_summary() {
    let tokens = tokenize("name +");

    assert_eq!(tokens[0].debug(), "1:0 Identifier (\"name\")");
    assert_eq!(tokens[1].debug(), "1:5 Plus");
}

proptest! {
    #[test]
    fn test_tokenize_is_idempotent(source in "[a-z0-9 +*=()\t\n\":#<>!-]{0,64}") {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    #[test]
    fn test_single_eof_at_end(source in "\\PC{0,64}") {
        let tokens = tokenize(&source);

        prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
        prop_assert_eq!(tokens.iter().filter(|token| token.kind == TokenKind::EOF).count(), 1);
    }
}
