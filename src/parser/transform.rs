//! Transform name parser
//!
//! Parses the specifier body of a `:: name (inverse) ;` rule. Names are
//! captured raw; canonicalization (`und`/`Any` omission, script-name
//! aliasing) belongs to the execution engine.

use super::error::ParseError;
use crate::lexer::Cursor;

/// Parse a transform name: one or more of ASCII letter, `-`, `_`.
pub(crate) fn parse_transform_name(cur: &mut Cursor<'_>) -> Result<String, ParseError> {
    let at = cur.offset();
    let mut name = String::new();
    while let Some(c) = cur.peek() {
        if c.is_ascii_alphabetic() || c == '-' || c == '_' {
            name.push(c);
            cur.bump();
        } else {
            break;
        }
    }
    if name.is_empty() {
        Err(ParseError::expected("transform name", at))
    } else {
        Ok(name)
    }
}

/// Parse a transform specifier body; the cursor is past `::` and leading
/// whitespace.
///
/// Forms, distinguished by the presence of `(`:
/// - `name` sets both directions to the same name
/// - `name ( inverse? )` sets forward, and inverse when named
/// - `( inverse )` sets only inverse
pub(crate) fn parse_transform_body(
    cur: &mut Cursor<'_>,
) -> Result<(Option<String>, Option<String>), ParseError> {
    if cur.eat('(') {
        // inverse-only: a name is required, otherwise the rule would name
        // no transform at all
        cur.skip_inline();
        let inverse = parse_transform_name(cur)?;
        cur.skip_inline();
        if !cur.eat(')') {
            return Err(ParseError::expected(
                "')' closing inverse transform",
                cur.offset(),
            ));
        }
        return Ok((None, Some(inverse)));
    }

    let forward = parse_transform_name(cur)?;
    cur.skip_inline();
    if cur.eat('(') {
        cur.skip_inline();
        let inverse = if cur.peek() == Some(')') {
            None
        } else {
            Some(parse_transform_name(cur)?)
        };
        cur.skip_inline();
        if !cur.eat(')') {
            return Err(ParseError::expected(
                "')' closing inverse transform",
                cur.offset(),
            ));
        }
        Ok((Some(forward), inverse))
    } else {
        Ok((Some(forward.clone()), Some(forward)))
    }
}
