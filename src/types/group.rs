use std::fmt;

use super::condition::Condition;
use super::error::BuildError;

/// Logical connective applied uniformly to every child of a group.
/// Mixing `&&` and `||` at one nesting level requires an explicit
/// sub-group.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    /// The wire-format join token.
    #[must_use]
    pub fn token(&self) -> &'static str {
        match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A child of a condition group: a leaf condition or a nested group.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum GroupChild {
    Condition(Condition),
    Group(ConditionGroup),
}

impl From<Condition> for GroupChild {
    fn from(c: Condition) -> Self {
        GroupChild::Condition(c)
    }
}

impl From<ConditionGroup> for GroupChild {
    fn from(g: ConditionGroup) -> Self {
        GroupChild::Group(g)
    }
}

/// An ordered, non-empty collection of conditions and nested groups
/// combined with a single logical operator. Groups own their children;
/// trees are built bottom-up, so cycles cannot occur.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionGroup {
    operator: LogicalOp,
    children: Vec<GroupChild>,
    negated: bool,
}

impl ConditionGroup {
    /// Build a group from already-constructed children.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyGroup`] if `children` is empty.
    pub fn new(operator: LogicalOp, children: Vec<GroupChild>) -> Result<Self, BuildError> {
        if children.is_empty() {
            return Err(BuildError::EmptyGroup);
        }
        Ok(Self {
            operator,
            children,
            negated: false,
        })
    }

    /// An AND group.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyGroup`] if `children` is empty.
    pub fn all(children: Vec<GroupChild>) -> Result<Self, BuildError> {
        Self::new(LogicalOp::And, children)
    }

    /// An OR group.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyGroup`] if `children` is empty.
    pub fn any(children: Vec<GroupChild>) -> Result<Self, BuildError> {
        Self::new(LogicalOp::Or, children)
    }

    /// Toggle negation of the whole group.
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    #[must_use]
    pub fn operator(&self) -> LogicalOp {
        self.operator
    }

    #[must_use]
    pub fn children(&self) -> &[GroupChild] {
        &self.children
    }

    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}
