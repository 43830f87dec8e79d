#![allow(clippy::module_inception)]

use std::{fmt::Write, sync::Arc};

use crate::errors::errors::{ErrorTip, LexError};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use errors::errors::LexResult;
pub use lexer::lexer::{tokenize, try_tokenize, LexerState};
pub use lexer::tokens::{Token, TokenKind};

/// Byte offset into a source unit, tagged with the unit's file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Arc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Arc::new(String::from("<null>")))
    }
}

/// Half-open byte range `start..end` of a lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Maps a byte offset to `(line, line_text, column)`, with a 1-based line and a
/// 0-based column counted in characters. The line text excludes its newline.
///
/// Offsets equal to the source length are valid and point just past the end.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position > source.len() || !source.is_char_boundary(position) {
        return None;
    }

    let before = &source[..position];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[position..]
        .find('\n')
        .map_or(source.len(), |i| position + i);

    let line_number = before.matches('\n').count() + 1;
    let column = source[line_start..position].chars().count();

    Some((line_number, source[line_start..line_end].to_string(), column))
}

/// Formats a lex error as a compiler-style diagnostic:
///
/// ```text
/// Error: BadEscape (Unknown escape `\q`, ...)
/// -> main.nod
///    |
///  1 | let s = "\q"
///    | ----------^
/// ```
pub fn render_error(source: &str, error: &LexError) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        let _ = writeln!(out, "{}", error);
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_str, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\n\nTesting { }\n";

        let (line_number, line, line_pos) = get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(source, 27).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }");
        assert_eq!(line_pos, 8);

        let (line_number, line, line_pos) = get_line_at_position(source, source.len()).unwrap();
        assert_eq!(line_number, 5);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);

        assert!(get_line_at_position(source, source.len() + 1).is_none());
    }

    #[test]
    fn test_get_line_counts_characters() {
        let source = "\"é\" x";
        let (_, _, line_pos) = get_line_at_position(source, source.len() - 1).unwrap();
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_render_error() {
        let source = "let s = \"\\q\"".to_string();
        let (_, error) = tokenize(source.clone(), Some("main.nod".to_string()));
        let rendered = render_error(&source, &error.unwrap());

        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("Error: BadEscape ("));
        assert_eq!(lines[1], "-> main.nod");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | let s = \"\\q\"");
        assert_eq!(lines[4], "  | ----------^");
    }

    #[test]
    fn test_render_error_without_tip() {
        let source = "  x @".to_string();
        let (_, error) = tokenize(source.clone(), None);
        let rendered = render_error(&source, &error.unwrap());

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Error: UnrecognisedCharacter");
        assert_eq!(lines[1], "-> shell");
        assert_eq!(lines[3], "1 | x @");
        assert_eq!(lines[4], "  | --^");
    }
}
