use std::fmt;

use super::error::BuildError;
use super::group::ConditionGroup;

/// The kind of analytical record a rule applies to.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliesTo {
    /// Customer-level records (one row per customer).
    Customer,
    /// Account-level records (one row per account).
    Account,
    /// Model output records (propensity scores and similar).
    Model,
}

impl AppliesTo {
    /// The target engine's class name for this record kind.
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        match self {
            AppliesTo::Customer => "Data-Customer",
            AppliesTo::Account => "Data-Account",
            AppliesTo::Model => "Data-Model",
        }
    }
}

impl fmt::Display for AppliesTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// The top-level artifact: a named rule targeting one record category,
/// with a single root condition group. Immutable once constructed;
/// a changed rule is a rebuilt rule.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    name: String,
    applies_to: AppliesTo,
    root: ConditionGroup,
    description: Option<String>,
    campaign_id: Option<String>,
}

impl Rule {
    /// Build a rule.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyRuleName`] if the name is empty or all
    /// whitespace. The root group is non-empty by construction.
    pub fn new(
        name: impl Into<String>,
        applies_to: AppliesTo,
        root: ConditionGroup,
    ) -> Result<Self, BuildError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BuildError::EmptyRuleName);
        }
        Ok(Self {
            name,
            applies_to,
            root,
            description: None,
            campaign_id: None,
        })
    }

    /// Attach a human-readable description. Not part of the rendered
    /// expression.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach the campaign identifier this rule targets. Not part of the
    /// rendered expression.
    #[must_use]
    pub fn with_campaign_id(mut self, campaign_id: impl Into<String>) -> Self {
        self.campaign_id = Some(campaign_id.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn applies_to(&self) -> AppliesTo {
        self.applies_to
    }

    #[must_use]
    pub fn root(&self) -> &ConditionGroup {
        &self.root
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn campaign_id(&self) -> Option<&str> {
        self.campaign_id.as_deref()
    }
}
