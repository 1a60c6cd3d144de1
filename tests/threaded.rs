use std::sync::Arc;
use std::thread;

use whenrule::{
    AppliesTo, ConditionGroup, FunctionRegistry, Rule, property, render_rule, rule_ref_false,
    validate_with,
};

fn exclusion_rule() -> Rule {
    let root = ConditionGroup::all(vec![
        property("AGE_NUM").gte(18_i64).into(),
        property("CUST_CTRY_RELN_CDE10")
            .neq_ignore_case("USP")
            .into(),
        rule_ref_false("IsCustomersHoldingMPF").into(),
    ])
    .unwrap();
    Rule::new("IsEligibleForCampaign_47817", AppliesTo::Customer, root).unwrap()
}

#[test]
fn shared_rule_renders_identically_across_threads() {
    let rule = Arc::new(exclusion_rule());
    let expected = render_rule(&rule).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let rule = Arc::clone(&rule);
            let expected = expected.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(render_rule(&rule).unwrap(), expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn shared_registry_validates_concurrently() {
    let registry = Arc::new(FunctionRegistry::standard());
    let text = Arc::new(render_rule(&exclusion_rule()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let text = Arc::clone(&text);
            thread::spawn(move || {
                for _ in 0..100 {
                    assert!(validate_with(&text, &registry).is_valid());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
