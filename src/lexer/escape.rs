//! Escape and quoted-literal decoding
//!
//! Decodes literal text into code points per the rule-set lexical grammar.
//! Escape forms are tried in precedence order: backslash escape, doubled
//! apostrophe, quoted hex escape, quoted verbatim run, bare code point.

use super::cursor::Cursor;
use crate::parser::error::ParseError;

/// Context in which a literal is being decoded
///
/// The reserved character set differs between ordinary rule text and the
/// inside of a bracketed character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralContext {
    /// Rule text (variable values, conversion rule segments)
    Rule,
    /// Inside a `[...]` character class
    Class,
}

/// A decoded literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// A single code point
    One(char),
    /// A verbatim quoted run
    Run(String),
}

/// Check whether `c` is reserved syntax in the given context
pub fn is_reserved(c: char, ctx: LiteralContext) -> bool {
    match ctx {
        LiteralContext::Rule => {
            c.is_whitespace() || matches!(c, ';' | '[' | ']' | '*' | '+' | '$' | '?')
        }
        LiteralContext::Class => matches!(c, ' ' | '[' | ']' | ':'),
    }
}

/// Decode the next literal at the cursor, if any.
///
/// Returns `Ok(None)` when the next code point is reserved in `ctx` (the
/// caller's grammar decides what it means). Malformed hex digits and
/// unterminated quotes or backslashes are hard lexical errors.
pub fn decode_literal(
    cur: &mut Cursor<'_>,
    ctx: LiteralContext,
) -> Result<Option<Decoded>, ParseError> {
    match cur.peek() {
        None => Ok(None),
        Some('\\') => {
            let at = cur.offset();
            cur.bump();
            if let Some(c) = try_hex_escape(cur) {
                return Ok(Some(Decoded::One(c)));
            }
            match cur.bump() {
                Some(c) => Ok(Some(Decoded::One(c))),
                None => Err(ParseError::InvalidEscape { offset: at }),
            }
        }
        Some('\'') => decode_quoted(cur).map(Some),
        Some(c) if !is_reserved(c, ctx) => {
            cur.bump();
            Ok(Some(Decoded::One(c)))
        }
        Some(_) => Ok(None),
    }
}

/// Try to decode `uXXXX` or `x{X..XXXX}` right after a backslash.
///
/// Only consumes input when the whole escape is well-formed; a malformed
/// tail falls back to the backslash-any rule (`\u` is a literal `u`).
fn try_hex_escape(cur: &mut Cursor<'_>) -> Option<char> {
    let rest = cur.rest();
    let (digits, consumed) = if let Some(tail) = rest.strip_prefix('u') {
        let digits: String = tail.chars().take(4).filter(|c| c.is_ascii_hexdigit()).collect();
        if digits.len() != 4 {
            return None;
        }
        (digits, 5)
    } else if let Some(tail) = rest.strip_prefix("x{") {
        let digits: String = tail.chars().take_while(|c| c.is_ascii_hexdigit()).collect();
        if digits.is_empty() || digits.len() > 4 || !tail[digits.len()..].starts_with('}') {
            return None;
        }
        let consumed = 2 + digits.len() + 1;
        (digits, consumed)
    } else {
        return None;
    };
    let value = u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32)?;
    for _ in 0..consumed {
        cur.bump();
    }
    Some(value)
}

/// Decode a quoted form; the cursor is at the opening apostrophe.
fn decode_quoted(cur: &mut Cursor<'_>) -> Result<Decoded, ParseError> {
    let at = cur.offset();
    cur.bump();
    if cur.eat('\'') {
        // doubled apostrophe
        return Ok(Decoded::One('\''));
    }
    if cur.starts_with("\\u") || cur.starts_with("\\x{") {
        return decode_quoted_hex(cur, at);
    }
    let mut run = String::new();
    loop {
        match cur.bump() {
            Some('\'') => break,
            Some(c) => run.push(c),
            None => return Err(ParseError::InvalidEscape { offset: at }),
        }
    }
    Ok(Decoded::Run(run))
}

/// Decode `'\uXXXX'` (exactly 4 hex digits) or `'\x{X..XXXX}'` (1-4 digits);
/// the cursor is just past the opening apostrophe.
fn decode_quoted_hex(cur: &mut Cursor<'_>, at: usize) -> Result<Decoded, ParseError> {
    cur.bump();
    let hex = match cur.bump() {
        Some('u') => {
            let mut hex = String::new();
            for _ in 0..4 {
                match cur.peek() {
                    Some(c) if c.is_ascii_hexdigit() => {
                        hex.push(c);
                        cur.bump();
                    }
                    _ => return Err(ParseError::InvalidEscape { offset: at }),
                }
            }
            hex
        }
        Some('x') => {
            cur.bump();
            let mut hex = String::new();
            while let Some(c) = cur.peek() {
                if c.is_ascii_hexdigit() {
                    hex.push(c);
                    cur.bump();
                } else {
                    break;
                }
            }
            if hex.is_empty() || hex.len() > 4 || !cur.eat('}') {
                return Err(ParseError::InvalidEscape { offset: at });
            }
            hex
        }
        _ => return Err(ParseError::InvalidEscape { offset: at }),
    };
    if !cur.eat('\'') {
        return Err(ParseError::InvalidEscape { offset: at });
    }
    let value = u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or(ParseError::InvalidEscape { offset: at })?;
    Ok(Decoded::One(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_one(src: &str, ctx: LiteralContext) -> Result<Option<Decoded>, ParseError> {
        let mut cur = Cursor::new(src);
        decode_literal(&mut cur, ctx)
    }

    #[test]
    fn test_escape_roundtrip() {
        // A, 'A', and bare A all decode to the same code point
        assert_eq!(
            decode_one("\\u0041", LiteralContext::Rule).unwrap(),
            Some(Decoded::One('A'))
        );
        assert_eq!(
            decode_one("'\\u0041'", LiteralContext::Rule).unwrap(),
            Some(Decoded::One('A'))
        );
        assert_eq!(
            decode_one("'A'", LiteralContext::Rule).unwrap(),
            Some(Decoded::Run("A".to_string()))
        );
        assert_eq!(
            decode_one("A", LiteralContext::Rule).unwrap(),
            Some(Decoded::One('A'))
        );
    }

    #[test]
    fn test_doubled_apostrophe() {
        assert_eq!(
            decode_one("''", LiteralContext::Rule).unwrap(),
            Some(Decoded::One('\''))
        );
    }

    #[test]
    fn test_backslash_takes_anything() {
        assert_eq!(
            decode_one("\\[", LiteralContext::Rule).unwrap(),
            Some(Decoded::One('['))
        );
        assert_eq!(
            decode_one("\\u", LiteralContext::Rule).unwrap(),
            Some(Decoded::One('u'))
        );
    }

    #[test]
    fn test_braced_hex() {
        assert_eq!(
            decode_one("'\\x{3042}'", LiteralContext::Rule).unwrap(),
            Some(Decoded::One('あ'))
        );
        assert_eq!(
            decode_one("'\\x{A}'", LiteralContext::Rule).unwrap(),
            Some(Decoded::One('\n'))
        );
        assert_eq!(
            decode_one("\\x{3042}", LiteralContext::Rule).unwrap(),
            Some(Decoded::One('あ'))
        );
    }

    #[test]
    fn test_bare_hex_falls_back_when_malformed() {
        // not four digits: the backslash-any rule applies to the `u`
        assert_eq!(
            decode_one("\\u041", LiteralContext::Rule).unwrap(),
            Some(Decoded::One('u'))
        );
        assert_eq!(
            decode_one("\\x{}", LiteralContext::Rule).unwrap(),
            Some(Decoded::One('x'))
        );
    }

    #[test]
    fn test_quoted_run_is_verbatim() {
        // no further expansion inside a quoted run
        assert_eq!(
            decode_one("'a;b'", LiteralContext::Rule).unwrap(),
            Some(Decoded::Run("a;b".to_string()))
        );
    }

    #[test]
    fn test_reserved_chars_stop() {
        assert_eq!(decode_one(";", LiteralContext::Rule).unwrap(), None);
        assert_eq!(decode_one("$", LiteralContext::Rule).unwrap(), None);
        assert_eq!(decode_one(":", LiteralContext::Class).unwrap(), None);
        // ':' is an ordinary character in rule text
        assert_eq!(
            decode_one(":", LiteralContext::Rule).unwrap(),
            Some(Decoded::One(':'))
        );
    }

    #[test]
    fn test_malformed_hex_is_error() {
        assert!(matches!(
            decode_one("'\\uZZZZ'", LiteralContext::Rule),
            Err(ParseError::InvalidEscape { .. })
        ));
        assert!(matches!(
            decode_one("'\\u041'", LiteralContext::Rule),
            Err(ParseError::InvalidEscape { .. })
        ));
        assert!(matches!(
            decode_one("'\\x{12345}'", LiteralContext::Rule),
            Err(ParseError::InvalidEscape { .. })
        ));
    }

    #[test]
    fn test_unterminated_quote_is_error() {
        assert!(matches!(
            decode_one("'abc", LiteralContext::Rule),
            Err(ParseError::InvalidEscape { .. })
        ));
        assert!(matches!(
            decode_one("\\", LiteralContext::Rule),
            Err(ParseError::InvalidEscape { .. })
        ));
    }

    #[test]
    fn test_surrogate_is_error() {
        assert!(matches!(
            decode_one("'\\uD800'", LiteralContext::Rule),
            Err(ParseError::InvalidEscape { .. })
        ));
    }
}
