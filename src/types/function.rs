use std::fmt;

use super::error::BuildError;
use super::literal::Literal;
use super::property::PropertyRef;

/// The fixed set of expression functions recognized by the target
/// rules engine. Anything outside this set is rejected by the validator
/// unless registered explicitly.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    // String comparisons
    EqualsIgnoreCase,
    NotEqualsIgnoreCase,
    Contains,
    StartsWith,
    EndsWith,

    // String manipulation
    Trim,
    ToUpper,
    ToLower,

    // Numeric comparisons
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Equals,
    NotEquals,

    // Date arithmetic
    ToDate,
    DateTimeDifference,
    GetCurrent,

    // Rule/page utilities
    IsInPageListWhen,
    UtilitiesCallWhen,

    // Boolean checks
    IsTrue,
    IsFalse,
    IsBlank,
    IsNotBlank,
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 23] = [
        FunctionKind::EqualsIgnoreCase,
        FunctionKind::NotEqualsIgnoreCase,
        FunctionKind::Contains,
        FunctionKind::StartsWith,
        FunctionKind::EndsWith,
        FunctionKind::Trim,
        FunctionKind::ToUpper,
        FunctionKind::ToLower,
        FunctionKind::GreaterThan,
        FunctionKind::GreaterThanOrEqual,
        FunctionKind::LessThan,
        FunctionKind::LessThanOrEqual,
        FunctionKind::Equals,
        FunctionKind::NotEquals,
        FunctionKind::ToDate,
        FunctionKind::DateTimeDifference,
        FunctionKind::GetCurrent,
        FunctionKind::IsInPageListWhen,
        FunctionKind::UtilitiesCallWhen,
        FunctionKind::IsTrue,
        FunctionKind::IsFalse,
        FunctionKind::IsBlank,
        FunctionKind::IsNotBlank,
    ];

    /// The wire-format name, without the `@` sigil.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            FunctionKind::EqualsIgnoreCase => "equalsIgnoreCase",
            FunctionKind::NotEqualsIgnoreCase => "notEqualsIgnoreCase",
            FunctionKind::Contains => "contains",
            FunctionKind::StartsWith => "startsWith",
            FunctionKind::EndsWith => "endsWith",
            FunctionKind::Trim => "trim",
            FunctionKind::ToUpper => "toUpper",
            FunctionKind::ToLower => "toLower",
            FunctionKind::GreaterThan => "greaterThan",
            FunctionKind::GreaterThanOrEqual => "greaterThanOrEqual",
            FunctionKind::LessThan => "lessThan",
            FunctionKind::LessThanOrEqual => "lessThanOrEqual",
            FunctionKind::Equals => "equals",
            FunctionKind::NotEquals => "notEquals",
            FunctionKind::ToDate => "toDate",
            FunctionKind::DateTimeDifference => "DateTimeDifference",
            FunctionKind::GetCurrent => "getCurrent",
            FunctionKind::IsInPageListWhen => "IsInPageListWhen",
            FunctionKind::UtilitiesCallWhen => "Utilities.callWhen",
            FunctionKind::IsTrue => "isTrue",
            FunctionKind::IsFalse => "isFalse",
            FunctionKind::IsBlank => "isBlank",
            FunctionKind::IsNotBlank => "isNotBlank",
        }
    }

    /// The fixed argument signature for this function.
    #[must_use]
    pub fn signature(&self) -> Signature {
        use ParamKind::{Any, Number, Text};
        let params: &'static [ParamKind] = match self {
            FunctionKind::EqualsIgnoreCase
            | FunctionKind::NotEqualsIgnoreCase
            | FunctionKind::Contains
            | FunctionKind::StartsWith
            | FunctionKind::EndsWith => &[Any, Text],
            FunctionKind::Equals | FunctionKind::NotEquals => &[Any, Any],
            FunctionKind::Trim
            | FunctionKind::ToUpper
            | FunctionKind::ToLower
            | FunctionKind::ToDate => &[Text],
            FunctionKind::GreaterThan
            | FunctionKind::GreaterThanOrEqual
            | FunctionKind::LessThan
            | FunctionKind::LessThanOrEqual => &[Any, Number],
            FunctionKind::DateTimeDifference => &[Any, Any, Text],
            FunctionKind::GetCurrent => &[],
            FunctionKind::IsInPageListWhen => &[Text, Any],
            FunctionKind::UtilitiesCallWhen => &[Text],
            FunctionKind::IsTrue
            | FunctionKind::IsFalse
            | FunctionKind::IsBlank
            | FunctionKind::IsNotBlank => &[Any],
        };
        Signature { params }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name())
    }
}

/// Class of value a function parameter accepts. Only literal arguments are
/// checked against `Text`/`Number`; property references and nested calls
/// carry no static type and pass any class.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Any,
    Text,
    Number,
}

impl ParamKind {
    fn admits(self, arg: &Arg) -> bool {
        match (self, arg) {
            (ParamKind::Any, _) => true,
            (_, Arg::Property(_) | Arg::Call(_)) => true,
            (ParamKind::Text, Arg::Literal(lit)) => lit.is_string(),
            (ParamKind::Number, Arg::Literal(lit)) => !lit.is_string(),
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParamKind::Any => "any value",
            ParamKind::Text => "a text value",
            ParamKind::Number => "a numeric value",
        }
    }
}

/// Fixed arity and parameter classes of a recognized function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    params: &'static [ParamKind],
}

impl Signature {
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn params(&self) -> &'static [ParamKind] {
        self.params
    }
}

/// An argument to a [`FunctionCall`]: a property reference, a literal, or a
/// nested call.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Property(PropertyRef),
    Literal(Literal),
    Call(FunctionCall),
}

impl From<PropertyRef> for Arg {
    fn from(p: PropertyRef) -> Self {
        Arg::Property(p)
    }
}

impl From<Literal> for Arg {
    fn from(l: Literal) -> Self {
        Arg::Literal(l)
    }
}

impl From<FunctionCall> for Arg {
    fn from(c: FunctionCall) -> Self {
        Arg::Call(c)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Arg::Literal(Literal::from(v))
    }
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Arg::Literal(Literal::Int(v))
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Literal(Literal::Float(v))
    }
}

/// An invocation of a recognized function with an ordered argument list,
/// checked against the function's signature at construction time.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    kind: FunctionKind,
    args: Vec<Arg>,
}

impl FunctionCall {
    /// Build a function call.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ArityMismatch`] when the argument count does
    /// not match the function's signature, or [`BuildError::ArgumentType`]
    /// when a literal argument has the wrong class.
    pub fn new(kind: FunctionKind, args: Vec<Arg>) -> Result<Self, BuildError> {
        let sig = kind.signature();
        if args.len() != sig.arity() {
            return Err(BuildError::ArityMismatch {
                function: kind.name(),
                expected: sig.arity(),
                found: args.len(),
            });
        }
        for (i, (param, arg)) in sig.params().iter().zip(&args).enumerate() {
            if !param.admits(arg) {
                return Err(BuildError::ArgumentType {
                    function: kind.name(),
                    position: i + 1,
                    expected: param.description(),
                });
            }
        }
        Ok(Self { kind, args })
    }

    #[must_use]
    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    #[must_use]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }
}
