//! Lexical utilities
//!
//! Source cursor with checkpoint/restore backtracking and escape decoding.
//! There is no token stream: a `[`-delimited construct may be a property
//! query, a literal class, or a nested set, and a bare identifier may be a
//! script name, category code, or variable reference, so the parser reads
//! code points directly and disambiguates at grammar points.

pub mod cursor;
pub mod escape;

pub use cursor::{Checkpoint, Cursor};
pub use escape::{decode_literal, is_reserved, Decoded, LiteralContext};
