//! Parse errors

use std::fmt;

/// Property query kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Script,
    Block,
    Category,
    CombiningClass,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyKind::Script => "script",
            PropertyKind::Block => "block",
            PropertyKind::Category => "category",
            PropertyKind::CombiningClass => "combining class",
        };
        write!(f, "{}", name)
    }
}

/// Parse error
///
/// The parser aborts at the first hard failure; there is no multi-error
/// accumulation. Soft errors feed alternative selection during
/// backtracking, and the deepest-reaching one is what the caller sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No grammar alternative matched at this point
    #[error("syntax error at offset {offset}: expected {expected}")]
    Syntax { expected: String, offset: usize },
    /// A property query named an unknown script/block/category/class
    #[error("unknown {kind} property: {name}")]
    UnknownProperty { kind: PropertyKind, name: String },
    /// A `$name` reference to a variable with no prior definition
    #[error("unknown variable: ${name}")]
    UnknownVariable { name: String },
    /// Malformed hex digits or an unterminated quote or backslash
    #[error("invalid escape sequence at offset {offset}")]
    InvalidEscape { offset: usize },
    /// Missing statement terminator
    #[error("unterminated rule at offset {offset}")]
    UnterminatedRule { offset: usize },
}

impl ParseError {
    /// Shorthand for a syntax error
    pub fn expected(what: impl Into<String>, offset: usize) -> Self {
        ParseError::Syntax {
            expected: what.into(),
            offset,
        }
    }

    /// Byte offset of the failure, where one is known
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { offset, .. }
            | ParseError::InvalidEscape { offset }
            | ParseError::UnterminatedRule { offset } => Some(*offset),
            ParseError::UnknownProperty { .. } | ParseError::UnknownVariable { .. } => None,
        }
    }

    /// Whether this error aborts the whole parse rather than feeding
    /// alternative selection
    ///
    /// An unknown property or variable, and a malformed escape, mean the
    /// same thing under every alternative.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ParseError::UnknownProperty { .. }
                | ParseError::UnknownVariable { .. }
                | ParseError::InvalidEscape { .. }
        )
    }

    /// Pick the deeper-reaching of two soft errors; on an exact tie of two
    /// syntax errors, the expected labels are combined.
    pub(crate) fn deeper(self, other: ParseError) -> ParseError {
        let a = self.offset().unwrap_or(0);
        let b = other.offset().unwrap_or(0);
        if b > a {
            return other;
        }
        if b == a {
            if let (
                ParseError::Syntax { expected: ea, offset },
                ParseError::Syntax { expected: eb, .. },
            ) = (&self, &other)
            {
                if ea != eb {
                    return ParseError::Syntax {
                        expected: format!("{} or {}", ea, eb),
                        offset: *offset,
                    };
                }
            }
        }
        self
    }
}
