//! Closed name lists for Unicode property lookups
//!
//! The lists mirror the Unicode property value inventories the rule grammar
//! can query: script names, block names, general category codes, and
//! canonical combining class names. Lookup maps are built once at first use
//! and shared as immutable data afterwards.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Script property values, lower-cased with underscores.
pub(crate) static SCRIPT_NAMES: &[&str] = &[
    "adlam",
    "ahom",
    "arabic",
    "armenian",
    "avestan",
    "balinese",
    "bamum",
    "batak",
    "bengali",
    "bopomofo",
    "brahmi",
    "braille",
    "buginese",
    "buhid",
    "canadian_aboriginal",
    "carian",
    "chakma",
    "cham",
    "cherokee",
    "common",
    "coptic",
    "cuneiform",
    "cypriot",
    "cyrillic",
    "deseret",
    "devanagari",
    "egyptian_hieroglyphs",
    "ethiopic",
    "georgian",
    "glagolitic",
    "gothic",
    "greek",
    "gujarati",
    "gurmukhi",
    "han",
    "hangul",
    "hanunoo",
    "hebrew",
    "hiragana",
    "imperial_aramaic",
    "inherited",
    "inscriptional_pahlavi",
    "inscriptional_parthian",
    "javanese",
    "kaithi",
    "kannada",
    "katakana",
    "kayah_li",
    "kharoshthi",
    "khmer",
    "lao",
    "latin",
    "lepcha",
    "limbu",
    "linear_b",
    "lisu",
    "lycian",
    "lydian",
    "malayalam",
    "mandaic",
    "meetei_mayek",
    "mongolian",
    "myanmar",
    "new_tai_lue",
    "nko",
    "ogham",
    "ol_chiki",
    "old_italic",
    "old_persian",
    "old_south_arabian",
    "old_turkic",
    "oriya",
    "osmanya",
    "phags_pa",
    "phoenician",
    "rejang",
    "runic",
    "samaritan",
    "saurashtra",
    "shavian",
    "sinhala",
    "sundanese",
    "syloti_nagri",
    "syriac",
    "tagalog",
    "tagbanwa",
    "tai_le",
    "tai_tham",
    "tai_viet",
    "tamil",
    "telugu",
    "thaana",
    "thai",
    "tibetan",
    "tifinagh",
    "ugaritic",
    "vai",
    "yi",
];

/// Block property values, canonical lower-snake-case atoms.
pub(crate) static BLOCK_NAMES: &[&str] = &[
    "basic_latin",
    "latin_1_supplement",
    "latin_extended_a",
    "latin_extended_b",
    "latin_extended_additional",
    "ipa_extensions",
    "spacing_modifier_letters",
    "combining_diacritical_marks",
    "combining_diacritical_marks_supplement",
    "greek_and_coptic",
    "greek_extended",
    "cyrillic",
    "cyrillic_supplement",
    "cyrillic_extended_a",
    "cyrillic_extended_b",
    "armenian",
    "hebrew",
    "arabic",
    "arabic_supplement",
    "arabic_presentation_forms_a",
    "arabic_presentation_forms_b",
    "syriac",
    "thaana",
    "nko",
    "samaritan",
    "devanagari",
    "bengali",
    "gurmukhi",
    "gujarati",
    "oriya",
    "tamil",
    "telugu",
    "kannada",
    "malayalam",
    "sinhala",
    "thai",
    "lao",
    "tibetan",
    "myanmar",
    "georgian",
    "georgian_supplement",
    "hangul_jamo",
    "hangul_compatibility_jamo",
    "hangul_syllables",
    "ethiopic",
    "cherokee",
    "unified_canadian_aboriginal_syllabics",
    "ogham",
    "runic",
    "khmer",
    "mongolian",
    "general_punctuation",
    "supplemental_punctuation",
    "superscripts_and_subscripts",
    "currency_symbols",
    "combining_marks_for_symbols",
    "letterlike_symbols",
    "number_forms",
    "arrows",
    "mathematical_operators",
    "miscellaneous_technical",
    "control_pictures",
    "enclosed_alphanumerics",
    "box_drawing",
    "block_elements",
    "geometric_shapes",
    "miscellaneous_symbols",
    "dingbats",
    "cjk_symbols_and_punctuation",
    "hiragana",
    "katakana",
    "katakana_phonetic_extensions",
    "bopomofo",
    "kanbun",
    "cjk_unified_ideographs",
    "cjk_unified_ideographs_extension_a",
    "cjk_compatibility",
    "cjk_compatibility_ideographs",
    "cjk_compatibility_forms",
    "yi_syllables",
    "yi_radicals",
    "halfwidth_and_fullwidth_forms",
    "alphabetic_presentation_forms",
    "combining_half_marks",
    "small_form_variants",
    "specials",
];

/// General category codes, lower-cased (both the single-letter groups and
/// the two-letter refinements).
pub(crate) static CATEGORY_CODES: &[&str] = &[
    "c", "cc", "cf", "cn", "co", "cs", //
    "l", "ll", "lm", "lo", "lt", "lu", //
    "m", "mc", "me", "mn", //
    "n", "nd", "nl", "no", //
    "p", "pc", "pd", "pe", "pf", "pi", "po", "ps", //
    "s", "sc", "sk", "sm", "so", //
    "z", "zl", "zp", "zs",
];

/// Canonical combining class names, lower-cased.
pub(crate) static COMBINING_CLASS_NAMES: &[&str] = &[
    "not_reordered",
    "overlay",
    "nukta",
    "kana_voicing",
    "virama",
    "attached_below_left",
    "attached_below",
    "attached_above",
    "attached_above_right",
    "below_left",
    "below",
    "below_right",
    "left",
    "right",
    "above_left",
    "above",
    "above_right",
    "double_below",
    "double_above",
    "iota_subscript",
];

/// Script lookup set, keyed by normalized (lower, underscored) name.
pub(crate) static SCRIPTS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SCRIPT_NAMES.iter().copied().collect());

/// Block lookup map: upper-cased underscored key to canonical atom.
pub(crate) static BLOCKS: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    BLOCK_NAMES
        .iter()
        .map(|atom| (atom.to_ascii_uppercase(), *atom))
        .collect()
});

/// General category lookup set, keyed by lower-cased code.
pub(crate) static CATEGORIES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| CATEGORY_CODES.iter().copied().collect());

/// Combining class lookup set, keyed by lower-cased name.
pub(crate) static COMBINING_CLASSES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| COMBINING_CLASS_NAMES.iter().copied().collect());
