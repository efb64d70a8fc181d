use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParser { .. } => "NoPrefixParser",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ExpectedIndentedBlock => "ExpectedIndentedBlock",
            ErrorImpl::FileRead { .. } => "FileRead",
            ErrorImpl::IdentifierNotFound { .. } => "IdentifierNotFound",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
            ErrorImpl::NotAFunction { .. } => "NotAFunction",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
            ErrorImpl::UnexpectedArguments { .. } => "UnexpectedArguments",
            ErrorImpl::ConversionError { .. } => "ConversionError",
            ErrorImpl::InvalidArgument { .. } => "InvalidArgument",
            ErrorImpl::OutputError { .. } => "OutputError",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::IntegerOverflow => "IntegerOverflow",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "expected `{}`, found `{}`",
                expected, found
            )),
            ErrorImpl::NoPrefixParser { kind, .. } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                kind
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::ExpectedIndentedBlock => ErrorTip::Suggestion(String::from(
                "indent the body by one level more than the line that opens it",
            )),
            ErrorImpl::FileRead { .. } => ErrorTip::None,
            ErrorImpl::IdentifierNotFound { name } => {
                ErrorTip::Suggestion(format!("`{}` is not bound, is it assigned first?", name))
            }
            ErrorImpl::UnknownOperator { .. } => ErrorTip::None,
            ErrorImpl::NotAFunction { .. } => ErrorTip::Suggestion(String::from(
                "only builtin functions can be called",
            )),
            ErrorImpl::InvalidAssignmentTarget { .. } => ErrorTip::Suggestion(String::from(
                "the left side of a compound assignment must be a name",
            )),
            ErrorImpl::UnexpectedArguments { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::ConversionError { .. } => ErrorTip::None,
            ErrorImpl::InvalidArgument { .. } => ErrorTip::None,
            ErrorImpl::OutputError { .. } => ErrorTip::None,
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::IntegerOverflow => ErrorTip::Suggestion(String::from(
                "integers are 64-bit and signed",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => write!(
                f,
                "expected next token to be {} at {}, got {} instead",
                expected, self.position, found
            ),
            ErrorImpl::FileRead { .. } => write!(f, "{}", self.internal_error),
            internal_error => write!(f, "{} at {}", internal_error, self.position),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind} ({token:?}) found")]
    NoPrefixParser { kind: TokenKind, token: String },
    #[error("could not parse {token:?} as int")]
    NumberParseError { token: String },
    #[error("expected an indented block")]
    ExpectedIndentedBlock,
    #[error("could not read {path:?}: {message}")]
    FileRead { path: String, message: String },
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },
    #[error("unknown operator: {operator}")]
    UnknownOperator { operator: String },
    #[error("not a function: {value}")]
    NotAFunction { value: String },
    #[error("cannot assign to {target}")]
    InvalidAssignmentTarget { target: String },
    #[error("unexpected arguments: expected {expected:?}, received {received:?}")]
    UnexpectedArguments { expected: usize, received: usize },
    #[error("cannot convert {value:?} to {target}")]
    ConversionError { value: String, target: String },
    #[error("{function}() does not accept {found}")]
    InvalidArgument { function: String, found: String },
    #[error("could not write output: {message}")]
    OutputError { message: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    IntegerOverflow,
}
