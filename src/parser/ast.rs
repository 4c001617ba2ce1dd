//! Rule AST types
//!
//! The parsed representation handed to the transformation engine. Rule
//! order is semantically significant: downstream precedence and pass
//! splitting depend on it matching source order exactly.

use indexmap::IndexSet;
use std::fmt;

use super::error::PropertyKind;
use crate::util::span::Span;

/// Direction a filter rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// Direction of a directed conversion rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvDirection {
    Forward,
    Backward,
}

/// Set algebra operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    Union,
    Difference,
    Intersection,
}

/// Unicode set expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetExpr {
    /// An explicit, ordered set of code points
    Literal(IndexSet<char>),
    /// A property query against the external Unicode tables
    Property { kind: PropertyKind, name: String },
    /// Complement of the inner expression
    Negation(Box<SetExpr>),
    /// Left-associative set algebra, folded in source order
    Binary {
        op: SetOp,
        left: Box<SetExpr>,
        right: Box<SetExpr>,
    },
}

impl SetExpr {
    /// Build a literal set from an iterator of code points
    pub fn literal(chars: impl IntoIterator<Item = char>) -> Self {
        SetExpr::Literal(chars.into_iter().collect())
    }

    /// Wrap in a negation
    pub fn negated(self) -> Self {
        SetExpr::Negation(Box::new(self))
    }

    /// Combine with another expression under `op`
    pub fn combine(self, op: SetOp, right: SetExpr) -> Self {
        SetExpr::Binary {
            op,
            left: Box::new(self),
            right: Box::new(right),
        }
    }
}

impl fmt::Display for SetExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetExpr::Literal(chars) => {
                write!(f, "[")?;
                for c in chars {
                    write!(f, "{}", c)?;
                }
                write!(f, "]")
            }
            SetExpr::Property { kind, name } => write!(f, "[:{}={}:]", kind, name),
            SetExpr::Negation(inner) => write!(f, "[^{}]", inner),
            SetExpr::Binary { op, left, right } => {
                let sym = match op {
                    SetOp::Union => "",
                    SetOp::Difference => " - ",
                    SetOp::Intersection => " & ",
                };
                write!(f, "[{}{}{}]", left, sym, right)
            }
        }
    }
}

/// One element of a value sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueElem {
    /// Literal text
    Text(String),
    /// A set expression
    Set(SetExpr),
}

impl fmt::Display for ValueElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueElem::Text(s) => write!(f, "{}", s),
            ValueElem::Set(set) => write!(f, "{}", set),
        }
    }
}

/// Ordered sequence of value elements
///
/// Variable references are resolved eagerly at parse time: a `$name` token
/// splices a copy of the stored value, so no live references remain here.
pub type ValueSeq = Vec<ValueElem>;

/// A directed context-sensitive conversion rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRule {
    pub direction: ConvDirection,
    /// Context that must precede the pattern
    pub before: Option<ValueSeq>,
    /// Text the rule consumes
    pub pattern: ValueSeq,
    /// Context that must follow the pattern
    pub after: Option<ValueSeq>,
    /// Replacement text
    pub completed: ValueSeq,
    /// Replacement tail at which rematching resumes
    pub revisit: Option<ValueSeq>,
}

/// A dual conversion rule as written in source
///
/// `before? { pattern | revisit } after? <-> completed { replacement | revisit2 } after2?`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualRule {
    pub before: Option<ValueSeq>,
    pub pattern: ValueSeq,
    pub revisit: Option<ValueSeq>,
    pub after: Option<ValueSeq>,
    /// Leading context on the right-hand side
    pub completed: Option<ValueSeq>,
    pub replacement: ValueSeq,
    pub replacement_revisit: Option<ValueSeq>,
    pub replacement_after: Option<ValueSeq>,
}

fn concat(head: &ValueSeq, tail: &Option<ValueSeq>) -> ValueSeq {
    let mut seq = head.clone();
    if let Some(tail) = tail {
        seq.extend(tail.iter().cloned());
    }
    seq
}

impl DualRule {
    /// Expand into the equivalent forward and backward rules.
    ///
    /// The forward rule matches `pattern revisit` in the left context and
    /// produces `replacement | revisit2`; the backward rule matches
    /// `replacement revisit2` in the right context and produces
    /// `pattern | revisit`.
    pub fn expand(&self) -> (ConversionRule, ConversionRule) {
        let forward = ConversionRule {
            direction: ConvDirection::Forward,
            before: self.before.clone(),
            pattern: concat(&self.pattern, &self.revisit),
            after: self.after.clone(),
            completed: self.replacement.clone(),
            revisit: self.replacement_revisit.clone(),
        };
        let backward = ConversionRule {
            direction: ConvDirection::Backward,
            before: self.completed.clone(),
            pattern: concat(&self.replacement, &self.replacement_revisit),
            after: self.replacement_after.clone(),
            completed: self.pattern.clone(),
            revisit: self.revisit.clone(),
        };
        (forward, backward)
    }
}

/// Rule kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// Restricts which characters later rules may affect
    Filter {
        set: SetExpr,
        applies_to: Direction,
    },
    /// Invokes a named transform; at least one of the two names is present
    Transform {
        forward: Option<String>,
        inverse: Option<String>,
    },
    /// A variable definition; also recorded in the variable table
    Variable { name: String, value: ValueSeq },
    /// A forward or backward conversion rule
    Conversion(ConversionRule),
    /// A dual conversion rule; see [`DualRule::expand`]
    DualConversion(DualRule),
}

/// A parsed rule with its source span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: RuleKind,
    pub span: Span,
}

/// Ordered rule set
///
/// The sequence equals source order exactly; transform rules interleaved
/// among conversion rules keep their positions so the engine can split
/// passes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
    pub span: Span,
}

impl RuleSet {
    /// Number of rules
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no rules
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules in source order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl std::ops::Index<usize> for RuleSet {
    type Output = Rule;

    fn index(&self, index: usize) -> &Rule {
        &self.rules[index]
    }
}
