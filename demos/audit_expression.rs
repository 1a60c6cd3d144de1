//! Validate expression text and print every finding with its offset.
//!
//! Run with: cargo run --example audit_expression

use whenrule::validate;

fn main() {
    let samples = [
        "((AGE_NUM >= 18) && {Rule IsFullKYC evaluates to true})",
        "(Rule IsHKID evaluates to true)",
        "(AGE_NUM >= 18 && ",
        "@bogusFunc(CUST_RISK_VAL,1)",
        "@equalsIgnoreCase(@trim(CUST_CTRY_RELN_CDE10))",
    ];

    for text in samples {
        let verdict = validate(text);
        println!("{text}");
        println!("  -> {verdict}");
        for finding in verdict.diagnostics() {
            println!("     {finding}");
        }
        println!();
    }
}
