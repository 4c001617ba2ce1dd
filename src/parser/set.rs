//! Unicode set compiler
//!
//! Parses `[ ... ]`-delimited set expressions: property queries, literal
//! character runs, nesting, negation, and set algebra. Operators and
//! juxtaposition share one precedence level and fold left to right in
//! source order.

use indexmap::IndexSet;
use tracing::trace;

use super::ast::{SetExpr, SetOp, ValueElem, ValueSeq};
use super::error::{ParseError, PropertyKind};
use super::variables::VariableTable;
use crate::lexer::{decode_literal, Cursor, Decoded, LiteralContext};
use crate::unicode;

/// Parse a bracketed set expression at the cursor.
pub(crate) fn parse_set(
    cur: &mut Cursor<'_>,
    vars: &VariableTable,
) -> Result<SetExpr, ParseError> {
    let at = cur.offset();
    if !cur.eat('[') {
        return Err(ParseError::expected("unicode character set", at));
    }
    let negated = cur.eat('^');

    // `[: ... :]` is a property query occupying the whole bracket
    if cur.peek() == Some(':') {
        let query = parse_property_query(cur, vars)?;
        if !cur.eat(']') {
            return Err(ParseError::expected(
                "']' closing property query",
                cur.offset(),
            ));
        }
        trace!("parsed property query {}", query);
        return Ok(apply_negation(negated, query));
    }

    let mut expr: Option<SetExpr> = None;
    let mut op = SetOp::Union;
    loop {
        cur.skip_inline();
        match cur.peek() {
            None => {
                return Err(ParseError::expected(
                    "']' closing character class",
                    cur.offset(),
                ))
            }
            Some(']') => {
                cur.bump();
                break;
            }
            Some('[') => {
                let item = parse_set(cur, vars)?;
                expr = Some(fold(expr, op, item));
                op = SetOp::Union;
            }
            // operators connect completed items; inside a literal run
            // these are ordinary characters
            Some('-') if expr.is_some() => {
                cur.bump();
                op = SetOp::Difference;
            }
            Some('&') if expr.is_some() => {
                cur.bump();
                op = SetOp::Intersection;
            }
            Some(_) => {
                let chars = parse_class_run(cur)?;
                if chars.is_empty() {
                    return Err(ParseError::expected("class character", cur.offset()));
                }
                expr = Some(fold(expr, op, SetExpr::Literal(chars)));
                op = SetOp::Union;
            }
        }
    }

    let body = expr.ok_or_else(|| ParseError::expected("unicode character set body", at))?;
    Ok(apply_negation(negated, body))
}

fn apply_negation(negated: bool, expr: SetExpr) -> SetExpr {
    if negated {
        expr.negated()
    } else {
        expr
    }
}

fn fold(acc: Option<SetExpr>, op: SetOp, item: SetExpr) -> SetExpr {
    match acc {
        None => item,
        Some(left) => left.combine(op, item),
    }
}

/// Parse a run of literal class characters into an ordered set.
///
/// The run ends at a class-reserved character (space, `[`, `]`, `:`).
fn parse_class_run(cur: &mut Cursor<'_>) -> Result<IndexSet<char>, ParseError> {
    let mut chars = IndexSet::new();
    loop {
        match decode_literal(cur, LiteralContext::Class)? {
            None => break,
            Some(Decoded::One(c)) => {
                let _ = chars.insert(c);
            }
            Some(Decoded::Run(s)) => {
                for c in s.chars() {
                    let _ = chars.insert(c);
                }
            }
        }
    }
    Ok(chars)
}

/// Parse a `: ... :` property query; the cursor is at the opening colon.
fn parse_property_query(
    cur: &mut Cursor<'_>,
    vars: &VariableTable,
) -> Result<SetExpr, ParseError> {
    cur.bump();
    let negated = cur.eat('^');
    let at = cur.offset();
    let name = collect_property_name(cur);

    let query = if cur.eat('=') {
        let value_at = cur.offset();
        let value = collect_property_name(cur);
        resolve_keyed(&name, &value, at, value_at)?
    } else {
        resolve_bare(&name, vars, at)?
    };

    if !cur.eat(':') {
        return Err(ParseError::expected(
            "':' closing property query",
            cur.offset(),
        ));
    }
    Ok(apply_negation(negated, query))
}

/// Collect a property name: letters, digits, `_`, `-`, and interior spaces.
fn collect_property_name(cur: &mut Cursor<'_>) -> String {
    let mut name = String::new();
    while let Some(c) = cur.peek() {
        if c.is_alphanumeric() || matches!(c, '_' | '-' | ' ') {
            name.push(c);
            cur.bump();
        } else {
            break;
        }
    }
    name.trim().to_string()
}

/// Resolve a `key=NAME` query against the external lookup tables.
fn resolve_keyed(
    key: &str,
    name: &str,
    key_at: usize,
    value_at: usize,
) -> Result<SetExpr, ParseError> {
    if name.is_empty() {
        return Err(ParseError::expected("property value", value_at));
    }
    match key.to_ascii_lowercase().as_str() {
        "script" => {
            let canonical = unicode::normalize_name(name);
            if unicode::is_script(&canonical) {
                Ok(SetExpr::Property {
                    kind: PropertyKind::Script,
                    name: canonical,
                })
            } else {
                Err(ParseError::UnknownProperty {
                    kind: PropertyKind::Script,
                    name: name.to_string(),
                })
            }
        }
        "block" => match unicode::block_atom(name) {
            Some(atom) => Ok(SetExpr::Property {
                kind: PropertyKind::Block,
                name: atom.to_string(),
            }),
            None => Err(ParseError::UnknownProperty {
                kind: PropertyKind::Block,
                name: name.to_string(),
            }),
        },
        "ccc" => {
            if unicode::is_combining_class(name) {
                Ok(SetExpr::Property {
                    kind: PropertyKind::CombiningClass,
                    name: unicode::normalize_name(name),
                })
            } else {
                Err(ParseError::UnknownProperty {
                    kind: PropertyKind::CombiningClass,
                    name: name.to_string(),
                })
            }
        }
        _ => Err(ParseError::expected(
            "property key (script, block, or ccc)",
            key_at,
        )),
    }
}

/// Resolve a bare `:NAME:` query: known script, then defined variable,
/// then general category code.
fn resolve_bare(
    name: &str,
    vars: &VariableTable,
    at: usize,
) -> Result<SetExpr, ParseError> {
    if name.is_empty() {
        return Err(ParseError::expected("property name", at));
    }
    let canonical = unicode::normalize_name(name);
    if unicode::is_script(&canonical) {
        return Ok(SetExpr::Property {
            kind: PropertyKind::Script,
            name: canonical,
        });
    }
    if let Some(value) = vars.get(name) {
        return set_from_value(value, at);
    }
    if unicode::is_category(name) {
        return Ok(SetExpr::Property {
            kind: PropertyKind::Category,
            name: name.to_string(),
        });
    }
    Err(ParseError::UnknownProperty {
        kind: PropertyKind::Category,
        name: name.to_string(),
    })
}

/// Interpret a variable value used in set position.
///
/// A single set element denotes that set; an all-text value denotes the
/// literal set of its code points.
fn set_from_value(value: &ValueSeq, at: usize) -> Result<SetExpr, ParseError> {
    if let [ValueElem::Set(set)] = value.as_slice() {
        return Ok(set.clone());
    }
    let mut chars = IndexSet::new();
    for elem in value {
        match elem {
            ValueElem::Text(s) => {
                for c in s.chars() {
                    let _ = chars.insert(c);
                }
            }
            ValueElem::Set(_) => {
                return Err(ParseError::expected(
                    "variable denoting a character class",
                    at,
                ))
            }
        }
    }
    Ok(SetExpr::Literal(chars))
}
