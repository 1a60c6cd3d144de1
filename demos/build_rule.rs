//! Build a campaign exclusion rule and print its rendered expression.
//!
//! Run with: cargo run --example build_rule

use whenrule::{
    AppliesTo, ConditionGroup, Rule, WhenRuleError, property, render_rule, rule_ref_false,
};

fn main() -> Result<(), WhenRuleError> {
    let suppressions = ConditionGroup::any(vec![
        property("CUST_SUPRS_CDE2").eq_ignore_case("Y").into(),
        property("CUST_SUPRS_CDE18").eq_ignore_case("Y").into(),
    ])?
    .negate();

    let root = ConditionGroup::all(vec![
        property("AGE_NUM").gte(18_i64).into(),
        property("CUST_CTRY_RELN_CDE10")
            .neq_ignore_case("USP")
            .into(),
        suppressions.into(),
        rule_ref_false("IsCustomersHoldingMPF").into(),
    ])?;

    let rule = Rule::new("IsEligibleForCampaign_47817", AppliesTo::Customer, root)?
        .with_description("Campaign 47817 targeting exclusions")
        .with_campaign_id("47817");

    println!("rule:       {}", rule.name());
    println!("applies to: {}", rule.applies_to());
    println!("expression: {}", render_rule(&rule)?);

    Ok(())
}
