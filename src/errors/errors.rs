use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::lexer::LexerState, Position};

/// Terminal failure of a scan.
///
/// Carries the scanner state at the moment of failure and the location of the
/// offending character (or of the end of input for an early EOF).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {line}:{column}")]
pub struct LexError {
    internal_error: ErrorImpl,
    final_state: LexerState,
    position: Position,
    line: usize,
    column: usize,
}

/// The three ways a scan can fail.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LexResult {
    EarlyEof,
    BadEscape,
    OtherError,
}

impl Display for LexResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl LexError {
    pub fn new(
        error_impl: ErrorImpl,
        final_state: LexerState,
        position: Position,
        line: usize,
        column: usize,
    ) -> Self {
        LexError {
            internal_error: error_impl,
            final_state,
            position,
            line,
            column,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_column(&self) -> usize {
        self.column
    }

    pub fn get_final_state(&self) -> LexerState {
        self.final_state
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_result(&self) -> LexResult {
        match &self.internal_error {
            ErrorImpl::EarlyEof { .. } => LexResult::EarlyEof,
            ErrorImpl::BadEscape { .. } | ErrorImpl::BadUnicodeEscape { .. } => {
                LexResult::BadEscape
            }
            ErrorImpl::UnrecognisedCharacter { .. }
            | ErrorImpl::MalformedNumber { .. }
            | ErrorImpl::BadLambdaArg { .. }
            | ErrorImpl::BadCharLiteral { .. } => LexResult::OtherError,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::EarlyEof { .. } => "EarlyEof",
            ErrorImpl::BadEscape { .. } => "BadEscape",
            ErrorImpl::BadUnicodeEscape { .. } => "BadUnicodeEscape",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::BadLambdaArg { .. } => "BadLambdaArg",
            ErrorImpl::BadCharLiteral { .. } => "BadCharLiteral",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::EarlyEof { context } => ErrorTip::Suggestion(format!(
                "Input ended inside a {}, is a closing quote missing?",
                context
            )),
            ErrorImpl::BadEscape { escape } => ErrorTip::Suggestion(format!(
                "Unknown escape `\\{}`, expected one of \\n \\t \\r \\0 \\\\ \\\" \\' or \\u{{...}}",
                escape
            )),
            ErrorImpl::BadUnicodeEscape { .. } => ErrorTip::Suggestion(String::from(
                "Unicode escapes take 1 to 6 hex digits naming a valid code point, like \\u{1F600}",
            )),
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumber { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, separate it from the following name",
                lexeme
            )),
            ErrorImpl::BadLambdaArg { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid lambda argument `{}`, use `$` followed by an index like `$0`",
                lexeme
            )),
            ErrorImpl::BadCharLiteral { lexeme } => ErrorTip::Suggestion(format!(
                "Char literal {} must hold exactly one character, use \"...\" for text",
                lexeme
            )),
        }
    }
}

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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected end of input inside {context}")]
    EarlyEof { context: String },
    #[error("unknown escape sequence: \\{escape}")]
    BadEscape { escape: char },
    #[error("invalid unicode escape: {sequence:?}")]
    BadUnicodeEscape { sequence: String },
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("malformed number: {lexeme:?}")]
    MalformedNumber { lexeme: String },
    #[error("malformed lambda argument: {lexeme:?}")]
    BadLambdaArg { lexeme: String },
    #[error("char literal must contain exactly one character: {lexeme}")]
    BadCharLiteral { lexeme: String },
}
