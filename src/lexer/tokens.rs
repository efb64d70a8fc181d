use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("elif", TokenKind::Elif);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("in", TokenKind::In);
        map.insert("print", TokenKind::Print);
        map.insert("int", TokenKind::Int);
        map.insert("str", TokenKind::Str);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Newline,
    Indent,
    Illegal,

    Number,
    String,
    Identifier,

    OpenParen,
    CloseParen,
    Colon,
    Comma,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,
    CaretEquals,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Caret,

    // Reserved
    If,
    Elif,
    Else,
    While,
    For,
    In,
    Print,
    Int,
    Str,
    And,
    Or,
}

impl TokenKind {
    /// Reserved words whose names double as builtin functions.
    pub fn is_builtin_keyword(&self) -> bool {
        matches!(self, TokenKind::Print | TokenKind::Int | TokenKind::Str)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// One-line summary: position, kind and, for tokens carrying text, the text.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Illegal,
        ]) {
            format!(
                "{}:{} {} ({:?})",
                self.position.line, self.position.column, self.kind, self.value
            )
        } else {
            format!(
                "{}:{} {}",
                self.position.line, self.position.column, self.kind
            )
        }
    }
}
