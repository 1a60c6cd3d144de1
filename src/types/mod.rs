mod condition;
mod error;
mod function;
mod group;
mod literal;
mod property;
mod registry;
mod rule;

pub use condition::{
    Comparator, ComparatorShape, Condition, LeftOperand, PropertyExpr, RightOperand, property,
    rule_ref, rule_ref_false,
};
pub use error::BuildError;
pub use function::{Arg, FunctionCall, FunctionKind, ParamKind, Signature};
pub use group::{ConditionGroup, GroupChild, LogicalOp};
pub use literal::Literal;
pub use property::PropertyRef;
pub use registry::FunctionRegistry;
pub use rule::{AppliesTo, Rule};
