//! Escape sequences accepted inside string and char literals.
//!
//! The scanner only validates escapes; decoding happens on demand through
//! [`decode_literal`], which the token type exposes as `cooked_value`.

/// Longest hex payload of a `\u{...}` escape.
pub const MAX_UNICODE_DIGITS: usize = 6;

/// Resolves a single-character escape (the character after the backslash).
pub fn simple_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

/// Resolves the hex payload of a `\u{...}` escape to a Unicode scalar value.
pub fn unicode_escape(hex: &str) -> Option<char> {
    if hex.is_empty()
        || hex.len() > MAX_UNICODE_DIGITS
        || !hex.chars().all(|c| c.is_ascii_hexdigit())
    {
        return None;
    }

    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Strips the quotes from a literal lexeme and resolves its escapes.
///
/// Returns `None` when the lexeme is not a well-formed quoted literal.
pub fn decode_literal(lexeme: &str) -> Option<String> {
    let quote = lexeme.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let body = lexeme
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))?;

    let mut result = String::new();
    let mut chars = body.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next()? {
            'u' => {
                if chars.next()? != '{' {
                    return None;
                }

                let mut hex = String::new();
                loop {
                    match chars.next()? {
                        '}' => break,
                        digit => hex.push(digit),
                    }
                }

                result.push(unicode_escape(&hex)?);
            }
            other => result.push(simple_escape(other)?),
        }
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_escapes() {
        assert_eq!(simple_escape('n'), Some('\n'));
        assert_eq!(simple_escape('\''), Some('\''));
        assert_eq!(simple_escape('q'), None);
    }

    #[test]
    fn test_unicode_escape_bounds() {
        assert_eq!(unicode_escape("41"), Some('A'));
        assert_eq!(unicode_escape("1F600"), Some('😀'));
        assert_eq!(unicode_escape("10FFFF"), Some('\u{10FFFF}'));
        assert_eq!(unicode_escape("110000"), None);
        assert_eq!(unicode_escape("D800"), None);
        assert_eq!(unicode_escape("0000041"), None);
        assert_eq!(unicode_escape(""), None);
    }

    #[test]
    fn test_decode_literal() {
        assert_eq!(decode_literal(r#""a\tb""#).as_deref(), Some("a\tb"));
        assert_eq!(decode_literal(r#""\u{48}i""#).as_deref(), Some("Hi"));
        assert_eq!(decode_literal(r"'\''").as_deref(), Some("'"));
        assert_eq!(decode_literal(r#""""#).as_deref(), Some(""));
        assert_eq!(decode_literal("abc"), None);
        assert_eq!(decode_literal(r#""\q""#), None);
    }
}
