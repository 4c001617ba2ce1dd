//! Whole rule-set integration tests

use translitc::{
    parse, ConvDirection, Direction, PropertyKind, RuleKind, SetExpr, ValueElem,
};

/// A Latin-to-Katakana style pass: filters, variables, conversion rules,
/// and interleaved transforms, all in one source.
#[test]
fn test_latin_katakana_style_rule_set() {
    let source = r"
# Latin to Katakana, abridged
:: [:Latin:] ;
:: ([:^Katakana:]) ;
:: NFD ;

$vowel = [aeiou] ;
$sep = '-' ;

ka → カ ; # syllables
ki → キ ;
n } $vowel → ン$sep ;
sh → s | h ;
カ ← ka ;

:: NFC ;
";
    let out = parse(source).unwrap();
    assert_eq!(out.rule_set.len(), 11);
    assert_eq!(out.variables.len(), 2);

    // the two filters, one per direction
    assert!(matches!(
        out.rule_set[0].kind,
        RuleKind::Filter { applies_to: Direction::Forward, .. }
    ));
    assert!(matches!(
        out.rule_set[1].kind,
        RuleKind::Filter { applies_to: Direction::Inverse, .. }
    ));

    // transforms keep their interleaved positions
    assert!(matches!(out.rule_set[2].kind, RuleKind::Transform { .. }));
    assert!(matches!(out.rule_set[10].kind, RuleKind::Transform { .. }));

    // `n } $vowel → ン$sep ;` resolves both variables at parse time
    match &out.rule_set[7].kind {
        RuleKind::Conversion(conv) => {
            assert_eq!(conv.direction, ConvDirection::Forward);
            assert_eq!(conv.pattern, vec![ValueElem::Text("n".to_string())]);
            let after = conv.after.as_ref().unwrap();
            assert!(matches!(after[0], ValueElem::Set(_)));
            assert_eq!(
                conv.completed,
                vec![
                    ValueElem::Text("ン".to_string()),
                    ValueElem::Text("-".to_string())
                ]
            );
        }
        other => panic!("unexpected rule: {:?}", other),
    }

    // the backward rule
    match &out.rule_set[9].kind {
        RuleKind::Conversion(conv) => {
            assert_eq!(conv.direction, ConvDirection::Backward);
            assert_eq!(conv.completed, vec![ValueElem::Text("カ".to_string())]);
        }
        other => panic!("unexpected rule: {:?}", other),
    }
}

/// Dual rules round through the documented pair expansion.
#[test]
fn test_dual_rule_in_context() {
    let source = "$w = [ao] ;\n$w { ts | u } ↔ ツ ;\n";
    let out = parse(source).unwrap();
    match &out.rule_set[1].kind {
        RuleKind::DualConversion(rule) => {
            let (fwd, bwd) = rule.expand();
            assert_eq!(fwd.direction, ConvDirection::Forward);
            assert_eq!(
                fwd.pattern,
                vec![
                    ValueElem::Text("ts".to_string()),
                    ValueElem::Text("u".to_string())
                ]
            );
            assert_eq!(fwd.completed, vec![ValueElem::Text("ツ".to_string())]);
            assert_eq!(bwd.direction, ConvDirection::Backward);
            assert_eq!(bwd.completed, vec![ValueElem::Text("ts".to_string())]);
            assert_eq!(bwd.revisit, Some(vec![ValueElem::Text("u".to_string())]));
        }
        other => panic!("unexpected rule: {:?}", other),
    }
}

/// Property queries across all four kinds in one set expression.
#[test]
fn test_mixed_property_queries() {
    let source = ":: [[:Hiragana:][:block=Katakana:][:Mn:][:ccc=Virama:]] ;";
    let out = parse(source).unwrap();
    let mut kinds = Vec::new();
    fn collect(set: &SetExpr, kinds: &mut Vec<PropertyKind>) {
        match set {
            SetExpr::Property { kind, .. } => kinds.push(*kind),
            SetExpr::Negation(inner) => collect(inner, kinds),
            SetExpr::Binary { left, right, .. } => {
                collect(left, kinds);
                collect(right, kinds);
            }
            SetExpr::Literal(_) => {}
        }
    }
    match &out.rule_set[0].kind {
        RuleKind::Filter { set, .. } => collect(set, &mut kinds),
        other => panic!("unexpected rule: {:?}", other),
    }
    assert_eq!(
        kinds,
        vec![
            PropertyKind::Script,
            PropertyKind::Block,
            PropertyKind::Category,
            PropertyKind::CombiningClass,
        ]
    );
}

/// Escaped text survives through values into emitted rules.
#[test]
fn test_escapes_in_rules() {
    let source = "'\\u0041' → \\; ;";
    let out = parse(source).unwrap();
    match &out.rule_set[0].kind {
        RuleKind::Conversion(conv) => {
            assert_eq!(conv.pattern, vec![ValueElem::Text("A".to_string())]);
            assert_eq!(conv.completed, vec![ValueElem::Text(";".to_string())]);
        }
        other => panic!("unexpected rule: {:?}", other),
    }
}
