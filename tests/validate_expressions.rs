use whenrule::{DiagnosticKind, FunctionKind, FunctionRegistry, validate, validate_with};

#[test]
fn dangling_operator_in_group() {
    let verdict = validate("(A && )");
    assert!(!verdict.is_valid());
    assert!(verdict
        .diagnostics()
        .iter()
        .any(|d| matches!(d.kind, DiagnosticKind::MissingOperand)));
}

#[test]
fn unknown_function_reported_at_position() {
    let verdict = validate("@bogusFunc(X,1)");
    assert!(!verdict.is_valid());
    let diag = &verdict.diagnostics()[0];
    assert_eq!(diag.position, 0);
    assert!(
        matches!(&diag.kind, DiagnosticKind::UnknownFunction(name) if name == "bogusFunc")
    );
}

#[test]
fn unterminated_group() {
    let verdict = validate("(A && B");
    assert!(!verdict.is_valid());
    assert!(verdict
        .diagnostics()
        .iter()
        .any(|d| matches!(d.kind, DiagnosticKind::UnterminatedGroup('('))));
}

#[test]
fn accepts_externally_authored_expression() {
    // Not renderer output: extra whitespace, paren-form rule reference.
    let text = "( AGE_NUM >= 18 )  &&  (Rule IsFullKYC evaluates to true)";
    let verdict = validate(text);
    assert!(verdict.is_valid(), "{:?}", verdict.diagnostics());
}

#[test]
fn accepts_if_prefixed_rule_reference() {
    assert!(validate("If (Rule IsHKID evaluates to true)").is_valid());
}

#[test]
fn rejects_malformed_rule_phrase_variants() {
    let cases = [
        "{Rule IsHKID evaluates true}",
        "{Rule evaluates to true}",
        "{IsHKID evaluates to true}",
        "{Rule IsHKID evaluates to maybe}",
        "{Rule IsHKID evaluates to true extra}",
    ];
    for text in cases {
        let verdict = validate(text);
        assert!(
            verdict
                .diagnostics()
                .iter()
                .any(|d| matches!(d.kind, DiagnosticKind::MalformedRuleRef(_))),
            "expected malformed-rule-ref for {text}, got {:?}",
            verdict.diagnostics()
        );
    }
}

#[test]
fn validation_never_stops_at_first_error() {
    let verdict = validate("(A && ) && @nopeFunc(X && {Rule Bad");
    assert!(verdict.diagnostics().len() >= 3);
}

#[test]
fn diagnostics_order_follows_positions() {
    let verdict = validate("@aFunc(X) && @bFunc(Y) && @cFunc(Z)");
    let positions: Vec<_> = verdict.diagnostics().iter().map(|d| d.position).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert_eq!(positions.len(), 3);
}

#[test]
fn custom_registry_admits_deployment_functions() {
    let text = "@lengthOfPageList(CUST_ACCTS)";
    assert!(!validate(text).is_valid());

    let mut registry = FunctionRegistry::standard();
    registry.register("lengthOfPageList", FunctionKind::IsBlank.signature());
    assert!(validate_with(text, &registry).is_valid());
}

#[test]
fn arity_checked_against_registry() {
    let verdict = validate("@equalsIgnoreCase(@trim(X))");
    assert!(verdict.diagnostics().iter().any(|d| matches!(
        &d.kind,
        DiagnosticKind::ArityMismatch { function, expected: 2, found: 1 } if function == "equalsIgnoreCase"
    )));
}

#[test]
fn unterminated_string_literal() {
    let verdict = validate("(X == \"abc");
    assert!(verdict
        .diagnostics()
        .iter()
        .any(|d| matches!(d.kind, DiagnosticKind::UnterminatedString)));
}

#[test]
fn newline_breaks_string_literal() {
    let verdict = validate("(X == \"abc\ndef\")");
    assert!(verdict
        .diagnostics()
        .iter()
        .any(|d| matches!(d.kind, DiagnosticKind::UnterminatedString)));
}

#[test]
fn empty_input_is_a_finding_not_a_failure() {
    let verdict = validate("");
    assert!(!verdict.is_valid());
    assert!(matches!(
        verdict.diagnostics()[0].kind,
        DiagnosticKind::EmptyExpression
    ));
}

#[test]
fn display_of_findings() {
    let verdict = validate("@bogusFunc(X)");
    assert_eq!(
        verdict.diagnostics()[0].to_string(),
        "offset 0: unknown function '@bogusFunc'"
    );
    assert_eq!(verdict.to_string(), "invalid (1 finding(s))");
    assert_eq!(validate("(A == 1)").to_string(), "valid");
}
