//! Rule-set parser
//!
//! This module implements a backtracking recursive-descent parser for
//! transliteration rule sets. The parser transforms source text into an
//! ordered [`RuleSet`] plus the final [`VariableTable`].

pub mod ast;
pub mod error;
mod rules;
mod set;
mod transform;
pub mod variables;

#[cfg(test)]
mod tests;

pub use ast::{
    ConvDirection, ConversionRule, Direction, DualRule, Rule, RuleKind, RuleSet, SetExpr, SetOp,
    ValueElem, ValueSeq,
};
pub use error::{ParseError, PropertyKind};
pub use variables::VariableTable;

use crate::lexer::Cursor;
use crate::util::span::Span;
use tracing::debug;

/// Result of a successful parse
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    /// Rules in source order
    pub rule_set: RuleSet,
    /// Final state of the variable table
    pub variables: VariableTable,
}

/// Parse a transliteration rule set.
///
/// # Arguments
/// * `source` - Rule-set source text
///
/// # Returns
/// The ordered rule set and final variable table, or the first hard error.
///
/// # Example
/// ```
/// use translitc::{parse, RuleKind};
///
/// let out = parse(":: [:^Katakana:] ;\n:: NFD ;").unwrap();
/// assert_eq!(out.rule_set.len(), 2);
/// assert!(matches!(out.rule_set[1].kind, RuleKind::Transform { .. }));
/// ```
pub fn parse(source: &str) -> Result<ParseOutput, ParseError> {
    debug!("parsing rule set ({} bytes)", source.len());

    let mut cur = Cursor::new(source);
    let mut variables = VariableTable::new();
    let mut parsed = Vec::new();

    loop {
        cur.skip_boundary();
        if cur.at_end() {
            break;
        }
        let rule = rules::parse_rule(&mut cur, &mut variables)?;
        log_rule(&rule);
        parsed.push(rule);
    }

    let span = match (parsed.first(), parsed.last()) {
        (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
        _ => Span::dummy(),
    };
    debug!(
        "parsed {} rules, {} variables",
        parsed.len(),
        variables.len()
    );

    Ok(ParseOutput {
        rule_set: RuleSet { rules: parsed, span },
        variables,
    })
}

/// Log an accepted rule for debugging
fn log_rule(rule: &Rule) {
    match &rule.kind {
        RuleKind::Filter { set, applies_to } => {
            debug!("rule {}: filter {:?} {}", rule.span, applies_to, set);
        }
        RuleKind::Transform { forward, inverse } => {
            debug!(
                "rule {}: transform forward={:?} inverse={:?}",
                rule.span, forward, inverse
            );
        }
        RuleKind::Variable { name, value } => {
            debug!("rule {}: ${} = {} elements", rule.span, name, value.len());
        }
        RuleKind::Conversion(conv) => {
            debug!("rule {}: {:?} conversion", rule.span, conv.direction);
        }
        RuleKind::DualConversion(_) => {
            debug!("rule {}: dual conversion", rule.span);
        }
    }
}
