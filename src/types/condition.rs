use super::function::{FunctionCall, FunctionKind};
use super::literal::Literal;
use super::property::PropertyRef;

/// Comparison operators usable in a binary condition.
///
/// Symbolic comparators render infix (`(AGE_NUM < 18)`); function-backed
/// comparators render as calls (`@equalsIgnoreCase(...)`). The mapping is
/// fixed by [`shape()`](Comparator::shape) and not overridable.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    EqualsIgnoreCase,
    NotEqualsIgnoreCase,
    Contains,
    StartsWith,
    EndsWith,
}

/// How a comparator appears in rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorShape {
    /// Infix operator inside parentheses, e.g. `(A < B)`.
    Symbolic(&'static str),
    /// A call to the given function with the two operands as arguments.
    Function(FunctionKind),
}

impl Comparator {
    /// The fixed rendering shape for this comparator.
    #[must_use]
    pub fn shape(&self) -> ComparatorShape {
        match self {
            Comparator::Eq => ComparatorShape::Symbolic("=="),
            Comparator::Neq => ComparatorShape::Symbolic("!="),
            Comparator::Gt => ComparatorShape::Symbolic(">"),
            Comparator::Gte => ComparatorShape::Symbolic(">="),
            Comparator::Lt => ComparatorShape::Symbolic("<"),
            Comparator::Lte => ComparatorShape::Symbolic("<="),
            Comparator::EqualsIgnoreCase => {
                ComparatorShape::Function(FunctionKind::EqualsIgnoreCase)
            }
            Comparator::NotEqualsIgnoreCase => {
                ComparatorShape::Function(FunctionKind::NotEqualsIgnoreCase)
            }
            Comparator::Contains => ComparatorShape::Function(FunctionKind::Contains),
            Comparator::StartsWith => ComparatorShape::Function(FunctionKind::StartsWith),
            Comparator::EndsWith => ComparatorShape::Function(FunctionKind::EndsWith),
        }
    }
}

/// Left side of a binary condition: the value under test.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum LeftOperand {
    Property(PropertyRef),
    Call(FunctionCall),
}

impl From<PropertyRef> for LeftOperand {
    fn from(p: PropertyRef) -> Self {
        LeftOperand::Property(p)
    }
}

impl From<FunctionCall> for LeftOperand {
    fn from(c: FunctionCall) -> Self {
        LeftOperand::Call(c)
    }
}

/// Right side of a binary condition: the value compared against.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum RightOperand {
    Literal(Literal),
    Call(FunctionCall),
}

impl From<Literal> for RightOperand {
    fn from(l: Literal) -> Self {
        RightOperand::Literal(l)
    }
}

impl From<FunctionCall> for RightOperand {
    fn from(c: FunctionCall) -> Self {
        RightOperand::Call(c)
    }
}

/// A single boolean test: either a comparison between an operand and a
/// value, or a reference to an externally defined named rule whose truth
/// value is consulted.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Compare {
        left: LeftOperand,
        comparator: Comparator,
        right: RightOperand,
        /// Wrap the left operand in `@trim(...)` when the comparator
        /// renders as a string function.
        trim: bool,
    },
    RuleRef {
        rule: String,
        evaluates_to: bool,
    },
}

impl Condition {
    /// Disable `@trim` normalization on a comparison condition.
    /// No effect on rule references.
    #[must_use]
    pub fn without_trim(self) -> Condition {
        match self {
            Condition::Compare {
                left,
                comparator,
                right,
                ..
            } => Condition::Compare {
                left,
                comparator,
                right,
                trim: false,
            },
            other => other,
        }
    }
}

/// Intermediate builder for comparison conditions on a property.
/// Created by [`property()`].
#[derive(Debug, Clone)]
pub struct PropertyExpr {
    property: PropertyRef,
}

impl PropertyExpr {
    fn symbolic(self, comparator: Comparator, value: impl Into<Literal>) -> Condition {
        Condition::Compare {
            left: LeftOperand::Property(self.property),
            comparator,
            right: RightOperand::Literal(value.into()),
            trim: false,
        }
    }

    fn function(self, comparator: Comparator, value: impl Into<Literal>) -> Condition {
        Condition::Compare {
            left: LeftOperand::Property(self.property),
            comparator,
            right: RightOperand::Literal(value.into()),
            trim: true,
        }
    }

    #[must_use]
    pub fn eq(self, value: impl Into<Literal>) -> Condition {
        self.symbolic(Comparator::Eq, value)
    }

    #[must_use]
    pub fn neq(self, value: impl Into<Literal>) -> Condition {
        self.symbolic(Comparator::Neq, value)
    }

    #[must_use]
    pub fn gt(self, value: impl Into<Literal>) -> Condition {
        self.symbolic(Comparator::Gt, value)
    }

    #[must_use]
    pub fn gte(self, value: impl Into<Literal>) -> Condition {
        self.symbolic(Comparator::Gte, value)
    }

    #[must_use]
    pub fn lt(self, value: impl Into<Literal>) -> Condition {
        self.symbolic(Comparator::Lt, value)
    }

    #[must_use]
    pub fn lte(self, value: impl Into<Literal>) -> Condition {
        self.symbolic(Comparator::Lte, value)
    }

    /// Case-insensitive equality, trim normalization on by default.
    #[must_use]
    pub fn eq_ignore_case(self, value: impl Into<Literal>) -> Condition {
        self.function(Comparator::EqualsIgnoreCase, value)
    }

    /// Case-insensitive inequality, trim normalization on by default.
    #[must_use]
    pub fn neq_ignore_case(self, value: impl Into<Literal>) -> Condition {
        self.function(Comparator::NotEqualsIgnoreCase, value)
    }

    #[must_use]
    pub fn contains(self, value: impl Into<Literal>) -> Condition {
        self.function(Comparator::Contains, value)
    }

    #[must_use]
    pub fn starts_with(self, value: impl Into<Literal>) -> Condition {
        self.function(Comparator::StartsWith, value)
    }

    #[must_use]
    pub fn ends_with(self, value: impl Into<Literal>) -> Condition {
        self.function(Comparator::EndsWith, value)
    }
}

/// Start a comparison condition on the named property.
///
/// The name is not checked here; the renderer rejects an empty name when
/// the condition is serialized. Use [`PropertyRef::new`] for checked
/// construction.
#[must_use]
pub fn property(name: &str) -> PropertyExpr {
    PropertyExpr {
        property: PropertyRef::raw(name),
    }
}

/// A condition that holds when the named external rule evaluates to true.
#[must_use]
pub fn rule_ref(name: &str) -> Condition {
    Condition::RuleRef {
        rule: name.to_owned(),
        evaluates_to: true,
    }
}

/// A condition that holds when the named external rule evaluates to false.
#[must_use]
pub fn rule_ref_false(name: &str) -> Condition {
    Condition::RuleRef {
        rule: name.to_owned(),
        evaluates_to: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbolic_builder_leaves_trim_off() {
        let cond = property("AGE_NUM").lt(18_i64);
        assert_eq!(
            cond,
            Condition::Compare {
                left: LeftOperand::Property(PropertyRef::new("AGE_NUM").unwrap()),
                comparator: Comparator::Lt,
                right: RightOperand::Literal(Literal::Int(18)),
                trim: false,
            }
        );
    }

    #[test]
    fn function_builder_turns_trim_on() {
        let cond = property("CUST_CTRY_RELN_CDE10").eq_ignore_case("USP");
        match cond {
            Condition::Compare {
                comparator, trim, ..
            } => {
                assert_eq!(comparator, Comparator::EqualsIgnoreCase);
                assert!(trim);
            }
            other => panic!("expected Compare, got {other:?}"),
        }
    }

    #[test]
    fn without_trim() {
        let cond = property("CUST_SUPRS_CDE36").contains("ABC").without_trim();
        match cond {
            Condition::Compare { trim, .. } => assert!(!trim),
            other => panic!("expected Compare, got {other:?}"),
        }
    }

    #[test]
    fn rule_ref_defaults_to_true() {
        assert_eq!(
            rule_ref("IsHKID"),
            Condition::RuleRef {
                rule: "IsHKID".to_owned(),
                evaluates_to: true,
            }
        );
    }

    #[test]
    fn rule_ref_false_variant() {
        assert_eq!(
            rule_ref_false("IsMMOCustomers"),
            Condition::RuleRef {
                rule: "IsMMOCustomers".to_owned(),
                evaluates_to: false,
            }
        );
    }

    #[test]
    fn symbolic_shapes() {
        let cases = [
            (Comparator::Eq, "=="),
            (Comparator::Neq, "!="),
            (Comparator::Gt, ">"),
            (Comparator::Gte, ">="),
            (Comparator::Lt, "<"),
            (Comparator::Lte, "<="),
        ];
        for (cmp, op) in cases {
            assert_eq!(cmp.shape(), ComparatorShape::Symbolic(op));
        }
    }

    #[test]
    fn function_shapes() {
        let cases = [
            (Comparator::EqualsIgnoreCase, FunctionKind::EqualsIgnoreCase),
            (
                Comparator::NotEqualsIgnoreCase,
                FunctionKind::NotEqualsIgnoreCase,
            ),
            (Comparator::Contains, FunctionKind::Contains),
            (Comparator::StartsWith, FunctionKind::StartsWith),
            (Comparator::EndsWith, FunctionKind::EndsWith),
        ];
        for (cmp, kind) in cases {
            assert_eq!(cmp.shape(), ComparatorShape::Function(kind));
        }
    }
}
