//! Variable definition and substitution tests

use crate::parser::{parse, ParseError, RuleKind, SetExpr, ValueElem};

/// scenario: `$mac = M [aA] [cC] ;`
#[test]
fn test_definition_value_shape() {
    let out = parse("$mac = M [aA] [cC] ;").unwrap();
    let value = out.variables.get("mac").unwrap();
    assert_eq!(value.len(), 3);
    assert_eq!(value[0], ValueElem::Text("M".to_string()));
    match &value[1] {
        ValueElem::Set(SetExpr::Literal(chars)) => {
            assert_eq!(chars.iter().collect::<String>(), "aA");
        }
        other => panic!("unexpected element: {:?}", other),
    }
    match &value[2] {
        ValueElem::Set(SetExpr::Literal(chars)) => {
            assert_eq!(chars.iter().collect::<String>(), "cC");
        }
        other => panic!("unexpected element: {:?}", other),
    }
}

/// A definition also emits a rule into the rule set
#[test]
fn test_definition_emits_rule() {
    let out = parse("$mac = M ;").unwrap();
    assert_eq!(out.rule_set.len(), 1);
    assert!(matches!(
        out.rule_set[0].kind,
        RuleKind::Variable { .. }
    ));
}

/// Copy-on-use: redefinition does not reach back into prior expansions
#[test]
fn test_copy_on_use() {
    let out = parse("$a = X ;\n$b = $a ;\n$a = Y ;").unwrap();
    assert_eq!(
        out.variables.get("b").unwrap(),
        &vec![ValueElem::Text("X".to_string())]
    );
    // the final table sees the redefinition
    assert_eq!(
        out.variables.get("a").unwrap(),
        &vec![ValueElem::Text("Y".to_string())]
    );
}

/// Substitution splices into conversion rule bodies
#[test]
fn test_substitution_in_conversion() {
    let out = parse("$v = [aeiou] ;\n$v → x ;").unwrap();
    match &out.rule_set[1].kind {
        RuleKind::Conversion(conv) => {
            assert_eq!(conv.pattern.len(), 1);
            assert!(matches!(conv.pattern[0], ValueElem::Set(_)));
        }
        other => panic!("unexpected rule: {:?}", other),
    }
}

/// An undefined reference fails the whole parse
#[test]
fn test_unknown_variable() {
    match parse("$b = $a ;") {
        Err(ParseError::UnknownVariable { name }) => assert_eq!(name, "a"),
        other => panic!("unexpected result: {:?}", other),
    }
}

/// Definitions are only visible to later rules
#[test]
fn test_use_before_definition_fails() {
    let source = "x → $late ;\n$late = y ;";
    assert!(matches!(
        parse(source),
        Err(ParseError::UnknownVariable { .. })
    ));
}

/// Identifier syntax follows id-start / id-continue
#[test]
fn test_identifier_syntax() {
    let out = parse("$état2 = x ;").unwrap();
    assert!(out.variables.contains("état2"));

    // digits cannot start an identifier
    assert!(parse("$2x = y ;").is_err());
}

/// An empty value is rejected
#[test]
fn test_empty_value_rejected() {
    assert!(parse("$x = ;").is_err());
}

/// Literal text merges across insignificant whitespace
#[test]
fn test_literal_merging() {
    let out = parse("$greeting = a b c ;").unwrap();
    assert_eq!(
        out.variables.get("greeting").unwrap(),
        &vec![ValueElem::Text("abc".to_string())]
    );
}

/// Quoted runs keep reserved characters verbatim
#[test]
fn test_quoted_value() {
    let out = parse("$sep = '; ' ;").unwrap();
    assert_eq!(
        out.variables.get("sep").unwrap(),
        &vec![ValueElem::Text("; ".to_string())]
    );
}
