use std::collections::HashMap;

use super::function::{FunctionKind, Signature};

/// The recognized function vocabulary, passed explicitly to the validator
/// so tests (and deployments with extra engine functions) can substitute
/// their own.
///
/// Maps wire-format names (without the `@` sigil) to signatures.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    functions: HashMap<String, Signature>,
}

impl FunctionRegistry {
    /// An empty registry. Every `@name(...)` is unknown until registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// The fixed built-in vocabulary ([`FunctionKind::ALL`]).
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for kind in FunctionKind::ALL {
            registry.register(kind.name(), kind.signature());
        }
        registry
    }

    /// Register a function name. Re-registering replaces the signature.
    pub fn register(&mut self, name: impl Into<String>, signature: Signature) {
        self.functions.insert(name.into(), signature);
    }

    /// Look up the signature for a function name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Signature> {
        self.functions.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// The number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Iterate over all registered (name, signature) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Signature)> {
        self.functions.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
