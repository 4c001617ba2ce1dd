//! translitc
//!
//! Parser for ICU/UTS #35 style transliteration rule sets: textual source
//! defining filters, transform invocations, variable definitions, and
//! context-sensitive conversion rules, compiled into an ordered rule
//! representation for a transformation-execution engine.
//!
//! The parser preserves exact source ordering (downstream rule precedence
//! and pass splitting depend on it), resolves variables eagerly with
//! copy-on-use semantics, and aborts at the first hard failure with a
//! structured error.
//!
//! # Example
//!
//! ```
//! use translitc::{parse, Direction, RuleKind};
//!
//! let source = r"
//! :: [:^Katakana:] ;
//! $vowel = [aeiou] ;
//! ka → カ ;
//! :: NFC ;
//! ";
//! let out = parse(source).unwrap();
//! assert_eq!(out.rule_set.len(), 4);
//! assert!(matches!(
//!     out.rule_set[0].kind,
//!     RuleKind::Filter { applies_to: Direction::Forward, .. }
//! ));
//! assert!(out.variables.contains("vowel"));
//! ```

#![doc(html_root_url = "https://docs.rs/translitc")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod lexer;
pub mod parser;
pub mod unicode;

// Utility modules
pub mod util;

// Re-exports
pub use parser::{
    parse, ConvDirection, ConversionRule, Direction, DualRule, ParseError, ParseOutput,
    PropertyKind, Rule, RuleKind, RuleSet, SetExpr, SetOp, ValueElem, ValueSeq, VariableTable,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
