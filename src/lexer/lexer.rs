use crate::{Position, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Columns an indent marker stands for.
pub const INDENT_WIDTH: u32 = 4;

/// What the character most recently consumed belonged to.
///
/// Identifiers and integers are accumulated one character at a time; a
/// character that does not continue the current classification finishes
/// the word in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classification {
    None,
    Identifier,
    Integer,
    String,
    Punctuation,
}

pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    pos: usize,
    line: u32,
    column: u32,
    classification: Classification,
    word: String,
    word_start: Position,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.chars().collect(),
            tokens: vec![],
            pos: 0,
            line: 1,
            column: 0,
            classification: Classification::None,
            word: String::new(),
            word_start: Position::new(1, 0),
        }
    }

    pub fn advance(&mut self) {
        self.pos += 1;
        self.column += 1;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source[self.pos]
    }

    pub fn peek(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Appends `c` to the word in progress when it continues `classification`,
    /// otherwise finishes that word and starts a new one at `c`.
    fn extend_word(&mut self, c: char, classification: Classification) {
        if self.classification != classification || self.word.is_empty() {
            self.finish_word();
            self.word_start = self.position();
            self.classification = classification;
        }

        self.word.push(c);
        self.advance();
    }

    /// Pushes the word in progress, if any. Keywords are only recognised here,
    /// once the word can no longer grow, so `iffy` never surfaces as `if`.
    fn finish_word(&mut self) {
        if self.word.is_empty() {
            return;
        }

        let word = std::mem::take(&mut self.word);
        let kind = match self.classification {
            Classification::Integer => TokenKind::Number,
            _ => RESERVED_LOOKUP
                .get(word.as_str())
                .copied()
                .unwrap_or(TokenKind::Identifier),
        };

        self.push(MK_TOKEN!(kind, word, self.word_start));
    }

    /// Ends the word in progress and records what kind of character broke it.
    fn break_word(&mut self, classification: Classification) {
        self.finish_word();
        self.classification = classification;
    }

    fn lex_letter(&mut self, c: char) {
        self.extend_word(c, Classification::Identifier);
    }

    fn lex_digit(&mut self, c: char) {
        // Digits after the first character of an identifier belong to it.
        if self.classification == Classification::Identifier && !self.word.is_empty() {
            self.extend_word(c, Classification::Identifier);
        } else {
            self.extend_word(c, Classification::Integer);
        }
    }

    fn lex_newline(&mut self) {
        self.break_word(Classification::None);
        self.push(MK_TOKEN!(TokenKind::Newline, String::from("\n"), self.position()));
        self.pos += 1;
        self.line += 1;
        self.column = 0;
    }

    fn lex_indent(&mut self) {
        self.break_word(Classification::None);
        self.push(MK_TOKEN!(TokenKind::Indent, String::from("\t"), self.position()));
        self.pos += 1;
        self.column += INDENT_WIDTH;
    }

    fn lex_punct(&mut self, kind: TokenKind, value: &str) {
        self.break_word(Classification::Punctuation);
        self.push(MK_TOKEN!(kind, String::from(value), self.position()));
        self.advance();
    }

    fn lex_operator(&mut self, single: TokenKind, compound: TokenKind) {
        self.break_word(Classification::Punctuation);

        let start = self.position();
        let first = self.at();

        if self.peek() == Some('=') {
            self.push(MK_TOKEN!(compound, format!("{}=", first), start));
            self.advance();
            self.advance();
        } else {
            self.push(MK_TOKEN!(single, first.to_string(), start));
            self.advance();
        }
    }

    /// Strings run to the next quote on the same line; there are no escapes.
    fn lex_string(&mut self) {
        self.break_word(Classification::String);

        let start = self.position();
        let mut end = self.pos + 1;
        while end < self.source.len() && self.source[end] != '"' && self.source[end] != '\n' {
            end += 1;
        }

        if end < self.source.len() && self.source[end] == '"' {
            let value: String = self.source[(self.pos + 1)..end].iter().collect();
            self.push(MK_TOKEN!(TokenKind::String, value, start));
            while self.pos <= end {
                self.advance();
            }
        } else {
            let value: String = self.source[self.pos..end].iter().collect();
            self.push(MK_TOKEN!(TokenKind::Illegal, value, start));
            while self.pos < end {
                self.advance();
            }
        }
    }

    fn skip_comment(&mut self) {
        self.break_word(Classification::None);

        while !self.at_eof() && self.at() != '\n' {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        self.break_word(Classification::None);
        self.advance();
    }

    fn lex_illegal(&mut self, c: char) {
        self.break_word(Classification::None);
        self.push(MK_TOKEN!(TokenKind::Illegal, c.to_string(), self.position()));
        self.advance();
    }
}

/// Single-character kind and `=`-suffixed kind for characters that may start
/// a two-character operator.
fn operator_kinds(c: char) -> Option<(TokenKind, TokenKind)> {
    match c {
        '=' => Some((TokenKind::Assignment, TokenKind::Equals)),
        '!' => Some((TokenKind::Not, TokenKind::NotEquals)),
        '<' => Some((TokenKind::Less, TokenKind::LessEquals)),
        '>' => Some((TokenKind::Greater, TokenKind::GreaterEquals)),
        '+' => Some((TokenKind::Plus, TokenKind::PlusEquals)),
        '-' => Some((TokenKind::Dash, TokenKind::MinusEquals)),
        '*' => Some((TokenKind::Star, TokenKind::StarEquals)),
        '/' => Some((TokenKind::Slash, TokenKind::SlashEquals)),
        '%' => Some((TokenKind::Percent, TokenKind::PercentEquals)),
        '^' => Some((TokenKind::Caret, TokenKind::CaretEquals)),
        _ => None,
    }
}

/// Converts normalized source (leading indentation already turned into tabs)
/// into tokens. The result always ends with exactly one `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let current = lex.at();

        if let Some((single, compound)) = operator_kinds(current) {
            lex.lex_operator(single, compound);
            continue;
        }

        match current {
            '\n' => lex.lex_newline(),
            '\t' => lex.lex_indent(),
            '#' => lex.skip_comment(),
            '"' => lex.lex_string(),
            '(' => lex.lex_punct(TokenKind::OpenParen, "("),
            ')' => lex.lex_punct(TokenKind::CloseParen, ")"),
            ':' => lex.lex_punct(TokenKind::Colon, ":"),
            ',' => lex.lex_punct(TokenKind::Comma, ","),
            c if c.is_whitespace() => lex.skip_whitespace(),
            c if c.is_ascii_digit() => lex.lex_digit(c),
            c if c.is_alphabetic() || c == '_' => lex.lex_letter(c),
            c => lex.lex_illegal(c),
        }
    }

    lex.finish_word();
    let end = Position::new(lex.line, 0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), end));
    lex.tokens
}
