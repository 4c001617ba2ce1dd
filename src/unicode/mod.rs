//! Unicode property lookup service
//!
//! Read-only lookups consulted by the set compiler and the identifier
//! scanner: script names, block names, general category codes, combining
//! class names, and id-start/id-continue membership. The name tables are
//! immutable shared data built once at first use.

mod tables;

/// Normalize a property name for lookup: lower-cased, with spaces and
/// hyphens folded to underscores.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Check whether `name` is a known script.
///
/// Expects the normalized (lower-cased, underscored) form; see
/// [`normalize_name`].
pub fn is_script(name: &str) -> bool {
    tables::SCRIPTS.contains(name)
}

/// Look up a block name case-insensitively, returning its canonical
/// lower-snake-case atom.
pub fn block_atom(name: &str) -> Option<&'static str> {
    let key = normalize_name(name).to_ascii_uppercase();
    tables::BLOCKS.get(&key).copied()
}

/// Check whether `code` is a known general category (1-2 letter code,
/// matched case-insensitively).
pub fn is_category(code: &str) -> bool {
    if code.is_empty() || code.len() > 2 {
        return false;
    }
    tables::CATEGORIES.contains(code.to_ascii_lowercase().as_str())
}

/// Check whether `name` is a recognized combining class name
/// (matched case-insensitively).
pub fn is_combining_class(name: &str) -> bool {
    tables::COMBINING_CLASSES.contains(normalize_name(name).as_str())
}

/// Check if a code point can start an identifier
pub fn is_identifier_start(c: char) -> bool {
    unicode_ident::is_xid_start(c)
}

/// Check if a code point can continue an identifier
pub fn is_identifier_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}
