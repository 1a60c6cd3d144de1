use std::fmt;

use super::error::BuildError;

/// A named data attribute on an analytical record, e.g. `AGE_NUM` or
/// `CUST_CTRY_RELN_CDE10`.
///
/// The name is treated as opaque: whether it exists in the real data
/// dictionary is an external collaborator's concern. The conventional form
/// is uppercase words joined by underscores; [`is_conventional()`]
/// reports conformance without enforcing it.
///
/// [`is_conventional()`]: PropertyRef::is_conventional
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyRef(String);

impl PropertyRef {
    /// Create a property reference.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyPropertyName`] if the name is empty or
    /// all whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, BuildError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BuildError::EmptyPropertyName);
        }
        Ok(Self(name))
    }

    /// Unchecked constructor for the builder surface; the renderer
    /// re-validates the name before emitting text.
    pub(crate) fn raw(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether the name follows the `UPPER_SNAKE` convention: uppercase
    /// words (digits allowed after the first character) joined by single
    /// underscores.
    #[must_use]
    pub fn is_conventional(&self) -> bool {
        self.0.split('_').all(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) if c.is_ascii_uppercase() => {}
                _ => return false,
            }
            chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        })
    }
}

impl fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
