use thiserror::Error;

use crate::render::RenderError;
use crate::types::BuildError;

/// Unified error type covering construction and rendering.
///
/// Convenient for callers that assemble a rule and render it in one `?`
/// chain. Validation findings are not errors and never appear here.
#[derive(Debug, Error)]
pub enum WhenRuleError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
