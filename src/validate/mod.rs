mod diagnostic;
mod scanner;

pub use diagnostic::{Diagnostic, DiagnosticKind, Validation};

use crate::types::FunctionRegistry;

/// Check arbitrary expression text for structural well-formedness against
/// the standard function vocabulary.
///
/// The call never fails: malformed text produces a [`Validation`] carrying
/// every finding the single scan pass could collect, in position order.
/// Truth values are never evaluated and property names are never looked up.
#[must_use]
pub fn validate(text: &str) -> Validation {
    validate_with(text, &FunctionRegistry::standard())
}

/// [`validate`] with an explicit function vocabulary, for deployments with
/// extra engine functions or tests substituting fixtures.
#[must_use]
pub fn validate_with(text: &str, registry: &FunctionRegistry) -> Validation {
    scanner::scan(text, registry)
}
