//! Utility macros for the lexer.
//!
//! - `MK_SPAN!` - Creates a Span between two byte offsets of a file
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the scanner's emit step.

/// Creates a Span covering `$start..$end` in `$file`.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(0, 3, lexer.file);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        $crate::Span {
            start: $crate::Position($start, ::std::sync::Arc::clone(&$file)),
            end: $crate::Position($end, ::std::sync::Arc::clone(&$file)),
        }
    };
}

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact source text of the token
/// * `$line` - 1-based line of the first character
/// * `$column` - 0-based column of the first character
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string(), 1, 0, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr, $column:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $line,
            column: $column,
            span: $span,
        }
    };
}
