//! Rule classifier and conversion rule parser
//!
//! Each rule attempt tries, in order: filter rule, transform rule, variable
//! definition, conversion rule. The first successful alternative wins; the
//! cursor is restored between attempts, and variable-table writes happen
//! only at the commit point of a fully parsed definition, so a backtracked
//! path leaves no side effects.

use super::ast::{
    ConvDirection, ConversionRule, Direction, DualRule, Rule, RuleKind, ValueElem, ValueSeq,
};
use super::error::ParseError;
use super::set::parse_set;
use super::transform::parse_transform_body;
use super::variables::VariableTable;
use crate::lexer::{decode_literal, Cursor, Decoded, LiteralContext};
use crate::unicode;
use crate::util::span::Span;

/// Parse one rule at the cursor.
pub(crate) fn parse_rule(
    cur: &mut Cursor<'_>,
    vars: &mut VariableTable,
) -> Result<Rule, ParseError> {
    let start = cur.position();
    let cp = cur.checkpoint();
    let mut best: Option<ParseError> = None;

    let alternatives: [fn(&mut Cursor<'_>, &mut VariableTable) -> Result<RuleKind, ParseError>;
        4] = [
        parse_filter_rule,
        parse_transform_rule,
        parse_variable_definition,
        parse_conversion_rule,
    ];

    for alternative in alternatives {
        match alternative(cur, vars) {
            Ok(kind) => {
                return Ok(Rule {
                    kind,
                    span: Span::new(start, cur.position()),
                })
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                best = Some(match best {
                    None => e,
                    Some(prev) => prev.deeper(e),
                });
                cur.restore(cp);
            }
        }
    }

    Err(best.unwrap_or_else(|| ParseError::expected("valid rule", start.offset)))
}

/// `::` prefix shared by filter and transform rules
fn expect_rule_prefix(cur: &mut Cursor<'_>) -> Result<(), ParseError> {
    let at = cur.offset();
    if cur.eat_str("::") {
        Ok(())
    } else {
        Err(ParseError::expected("'::'", at))
    }
}

/// `:: set ;` restricts forward application; `:: (set) ;` restricts inverse.
fn parse_filter_rule(
    cur: &mut Cursor<'_>,
    vars: &mut VariableTable,
) -> Result<RuleKind, ParseError> {
    expect_rule_prefix(cur)?;
    cur.skip_inline();
    let (set, applies_to) = if cur.eat('(') {
        cur.skip_inline();
        let set = parse_set(cur, vars)?;
        cur.skip_inline();
        if !cur.eat(')') {
            return Err(ParseError::expected(
                "')' closing inverse filter",
                cur.offset(),
            ));
        }
        (set, Direction::Inverse)
    } else {
        (parse_set(cur, vars)?, Direction::Forward)
    };
    end_of_rule(cur)?;
    Ok(RuleKind::Filter { set, applies_to })
}

/// `:: name ;` | `:: name (inverse?) ;` | `:: (inverse) ;`
fn parse_transform_rule(
    cur: &mut Cursor<'_>,
    _vars: &mut VariableTable,
) -> Result<RuleKind, ParseError> {
    expect_rule_prefix(cur)?;
    cur.skip_inline();
    let (forward, inverse) = parse_transform_body(cur)?;
    end_of_rule(cur)?;
    Ok(RuleKind::Transform { forward, inverse })
}

/// `$name = value ;` — the table write is the commit point, after the
/// terminator has parsed.
fn parse_variable_definition(
    cur: &mut Cursor<'_>,
    vars: &mut VariableTable,
) -> Result<RuleKind, ParseError> {
    let at = cur.offset();
    if !cur.eat('$') {
        return Err(ParseError::expected("variable definition", at));
    }
    let name = parse_identifier(cur)?;
    cur.skip_inline();
    if !cur.eat('=') {
        return Err(ParseError::expected("'=' after variable name", cur.offset()));
    }
    let value = parse_value_seq(cur, vars)?;
    if value.is_empty() {
        return Err(ParseError::expected("variable value", cur.offset()));
    }
    end_of_rule(cur)?;
    vars.define(name.clone(), value.clone());
    Ok(RuleKind::Variable { name, value })
}

/// An identifier: one id-start code point, then id-continue code points.
fn parse_identifier(cur: &mut Cursor<'_>) -> Result<String, ParseError> {
    let at = cur.offset();
    match cur.peek() {
        Some(c) if unicode::is_identifier_start(c) => {
            let mut name = String::new();
            name.push(c);
            cur.bump();
            while let Some(c) = cur.peek() {
                if unicode::is_identifier_continue(c) {
                    name.push(c);
                    cur.bump();
                } else {
                    break;
                }
            }
            Ok(name)
        }
        _ => Err(ParseError::expected("identifier", at)),
    }
}

/// Parse a value sequence: literal text, sets, and variable substitutions.
///
/// The sequence ends at a statement separator, a context marker, or an
/// arrow. Adjacent literal code points merge into one text element across
/// insignificant whitespace.
pub(crate) fn parse_value_seq(
    cur: &mut Cursor<'_>,
    vars: &VariableTable,
) -> Result<ValueSeq, ParseError> {
    let mut seq = ValueSeq::new();
    let mut text = String::new();

    fn flush(text: &mut String, seq: &mut ValueSeq) {
        if !text.is_empty() {
            seq.push(ValueElem::Text(std::mem::take(text)));
        }
    }

    loop {
        cur.skip_inline();
        let Some(c) = cur.peek() else { break };
        if matches!(c, ';' | '{' | '}' | '|' | '<' | '→' | '←' | '↔') {
            break;
        }
        if c == '-' && cur.peek_second() == Some('>') {
            break;
        }
        match c {
            '[' => {
                flush(&mut text, &mut seq);
                let set = parse_set(cur, vars)?;
                seq.push(ValueElem::Set(set));
            }
            '$' => {
                let at = cur.offset();
                cur.bump();
                let name = parse_identifier(cur)
                    .map_err(|_| ParseError::expected("variable name", at))?;
                match vars.get(&name) {
                    None => return Err(ParseError::UnknownVariable { name }),
                    Some(value) => {
                        // copy-on-use: splice the current value, not a
                        // live reference
                        flush(&mut text, &mut seq);
                        seq.extend(value.iter().cloned());
                    }
                }
            }
            _ => match decode_literal(cur, LiteralContext::Rule)? {
                None => break,
                Some(Decoded::One(c)) => text.push(c),
                Some(Decoded::Run(s)) => text.push_str(&s),
            },
        }
    }
    flush(&mut text, &mut seq);
    Ok(seq)
}

/// One side of a conversion rule.
///
/// `{`, `|`, and `}` are independent markers, each omitted together with the
/// segment it introduces: `lead ('{' body)? ('|' revisit)? ('}' post)?`.
/// A context form with no before-context reads `pattern } after`, one with
/// no after-context reads `before { pattern`.
#[derive(Debug)]
struct Half {
    lead: ValueSeq,
    body: Option<ValueSeq>,
    revisit: Option<ValueSeq>,
    post: Option<ValueSeq>,
}

fn parse_half(cur: &mut Cursor<'_>, vars: &VariableTable) -> Result<Half, ParseError> {
    let lead = parse_value_seq(cur, vars)?;
    let body = if cur.eat('{') {
        Some(parse_value_seq(cur, vars)?)
    } else {
        None
    };
    let revisit = if cur.eat('|') {
        Some(parse_value_seq(cur, vars)?)
    } else {
        None
    };
    let post = if cur.eat('}') {
        Some(parse_value_seq(cur, vars)?)
    } else {
        None
    };
    Ok(Half {
        lead,
        body,
        revisit,
        post,
    })
}

/// Arrow separating the two sides of a conversion rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arrow {
    Forward,
    Backward,
    Dual,
}

/// Both the Unicode glyphs and the ASCII digraphs are accepted.
fn parse_arrow(cur: &mut Cursor<'_>) -> Option<Arrow> {
    cur.skip_inline();
    if cur.eat_str("↔") || cur.eat_str("<->") {
        Some(Arrow::Dual)
    } else if cur.eat_str("→") || cur.eat_str("->") {
        Some(Arrow::Forward)
    } else if cur.eat_str("←") || cur.eat_str("<-") {
        Some(Arrow::Backward)
    } else {
        None
    }
}

/// `before? { pattern } after? -> completed (| revisit)? ;` and the
/// backward and dual forms.
fn parse_conversion_rule(
    cur: &mut Cursor<'_>,
    vars: &mut VariableTable,
) -> Result<RuleKind, ParseError> {
    let lhs = parse_half(cur, vars)?;
    let Some(arrow) = parse_arrow(cur) else {
        return Err(ParseError::expected("conversion arrow", cur.offset()));
    };
    let rhs = parse_half(cur, vars)?;
    let kind = assemble(lhs, arrow, rhs, cur.offset())?;
    end_of_rule(cur)?;
    Ok(kind)
}

fn opt(seq: ValueSeq) -> Option<ValueSeq> {
    if seq.is_empty() {
        None
    } else {
        Some(seq)
    }
}

/// Split a context-form half into before/pattern/after; revisit markers are
/// not valid on the context side of a directed rule.
fn split_context(
    half: Half,
    at: usize,
) -> Result<(Option<ValueSeq>, ValueSeq, Option<ValueSeq>), ParseError> {
    if half.revisit.is_some() {
        return Err(ParseError::expected(
            "context (a revisit marker here is only valid in dual rules)",
            at,
        ));
    }
    let after = half.post.and_then(opt);
    match half.body {
        Some(body) => {
            if body.is_empty() {
                Err(ParseError::expected("pattern text", at))
            } else {
                Ok((opt(half.lead), body, after))
            }
        }
        None => {
            if half.lead.is_empty() {
                Err(ParseError::expected("pattern text", at))
            } else {
                Ok((None, half.lead, after))
            }
        }
    }
}

/// Split a dual-rule side into pre/body/revisit/post.
fn split_dual_side(
    half: Half,
    at: usize,
) -> Result<
    (
        Option<ValueSeq>,
        ValueSeq,
        Option<ValueSeq>,
        Option<ValueSeq>,
    ),
    ParseError,
> {
    let post = half.post.and_then(opt);
    match half.body {
        Some(body) => {
            if body.is_empty() {
                Err(ParseError::expected("pattern text", at))
            } else {
                Ok((opt(half.lead), body, half.revisit, post))
            }
        }
        None => {
            if half.lead.is_empty() {
                Err(ParseError::expected("pattern text", at))
            } else {
                Ok((None, half.lead, half.revisit, post))
            }
        }
    }
}

/// Check that a result side is plain `completed (| revisit)?`.
fn split_result(half: Half, at: usize) -> Result<(ValueSeq, Option<ValueSeq>), ParseError> {
    if half.body.is_some() || half.post.is_some() {
        return Err(ParseError::expected("replacement text", at));
    }
    Ok((half.lead, half.revisit))
}

fn assemble(lhs: Half, arrow: Arrow, rhs: Half, at: usize) -> Result<RuleKind, ParseError> {
    match arrow {
        Arrow::Forward => {
            let (before, pattern, after) = split_context(lhs, at)?;
            let (completed, revisit) = split_result(rhs, at)?;
            Ok(RuleKind::Conversion(ConversionRule {
                direction: ConvDirection::Forward,
                before,
                pattern,
                after,
                completed,
                revisit,
            }))
        }
        Arrow::Backward => {
            let (completed, revisit) = split_result(lhs, at)?;
            let (before, pattern, after) = split_context(rhs, at)?;
            Ok(RuleKind::Conversion(ConversionRule {
                direction: ConvDirection::Backward,
                before,
                pattern,
                after,
                completed,
                revisit,
            }))
        }
        Arrow::Dual => {
            let (before, pattern, revisit, after) = split_dual_side(lhs, at)?;
            let (completed, replacement, replacement_revisit, replacement_after) =
                split_dual_side(rhs, at)?;
            Ok(RuleKind::DualConversion(DualRule {
                before,
                pattern,
                revisit,
                after,
                completed,
                replacement,
                replacement_revisit,
                replacement_after,
            }))
        }
    }
}

/// Statement terminator: optional whitespace, `;`, optional whitespace,
/// optional trailing comment.
fn end_of_rule(cur: &mut Cursor<'_>) -> Result<(), ParseError> {
    cur.skip_inline();
    if !cur.eat(';') {
        return Err(ParseError::UnterminatedRule {
            offset: cur.offset(),
        });
    }
    cur.skip_inline();
    if cur.peek() == Some('#') {
        cur.skip_comment();
    }
    Ok(())
}
