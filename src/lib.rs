mod error;
mod render;
mod types;
mod validate;

pub use error::WhenRuleError;
pub use render::{RenderError, render_group, render_rule};
pub use types::{
    AppliesTo, Arg, BuildError, Comparator, ComparatorShape, Condition, ConditionGroup,
    FunctionCall, FunctionKind, FunctionRegistry, GroupChild, LeftOperand, Literal, LogicalOp,
    ParamKind, PropertyExpr, PropertyRef, RightOperand, Rule, Signature, property, rule_ref,
    rule_ref_false,
};
pub use validate::{Diagnostic, DiagnosticKind, Validation, validate, validate_with};
