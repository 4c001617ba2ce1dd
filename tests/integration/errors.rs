//! Error reporting integration tests

use translitc::{parse, ParseError, PropertyKind};

/// The parse aborts at the first hard failure; nothing partial escapes.
#[test]
fn test_first_failure_wins() {
    let source = ":: NFD ;\n:: [:block=NOPE:] ;\n:: [:block=ALSO_NOPE:] ;";
    match parse(source) {
        Err(ParseError::UnknownProperty { kind, name }) => {
            assert_eq!(kind, PropertyKind::Block);
            assert_eq!(name, "NOPE");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

/// A syntax failure reports the deepest-reaching attempt.
#[test]
fn test_deepest_label_reported() {
    // the set expression fails further in than the transform-name reading
    match parse(":: ([abc) ;") {
        Err(ParseError::Syntax { offset, .. }) => {
            assert!(offset > 4, "offset {} should be inside the set", offset);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

/// Offsets point at the failure position.
#[test]
fn test_unterminated_rule_offset() {
    match parse(":: NFD") {
        Err(ParseError::UnterminatedRule { offset }) => assert_eq!(offset, 6),
        other => panic!("unexpected result: {:?}", other),
    }
}

/// Escape errors are lexical and fatal.
#[test]
fn test_invalid_escape_aborts() {
    assert!(matches!(
        parse("a → '\\uZZZZ' ;"),
        Err(ParseError::InvalidEscape { .. })
    ));
    assert!(matches!(
        parse("$x = 'unterminated ;"),
        Err(ParseError::InvalidEscape { .. })
    ));
}

/// Errors render human-readable messages.
#[test]
fn test_error_display() {
    let err = parse(":: [:block=NOPE:] ;").unwrap_err();
    assert_eq!(err.to_string(), "unknown block property: NOPE");

    let err = parse(":: NFD").unwrap_err();
    assert!(err.to_string().contains("unterminated rule"));
}
