use std::fmt;

use thiserror::Error;

/// What a single validation finding is about.
///
/// Findings are data, not failures: the validator characterizes arbitrary
/// text and never aborts, so every problem it can see in one pass is
/// reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("unknown function '@{0}'")]
    UnknownFunction(String),

    #[error("function '@{function}' expects {expected} argument(s), got {found}")]
    ArityMismatch {
        function: String,
        expected: usize,
        found: usize,
    },

    #[error("operator '{0}' is not preceded by an operand")]
    MisplacedOperator(String),

    #[error("invalid operator '{0}'")]
    InvalidOperator(String),

    #[error("expected '&&' or '||' before this operand")]
    MissingOperator,

    #[error("expected an operand")]
    MissingOperand,

    #[error("unmatched '{0}'")]
    UnbalancedCloser(char),

    #[error("'{0}' is never closed")]
    UnterminatedGroup(char),

    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("malformed rule reference: {0}")]
    MalformedRuleRef(String),

    #[error("function name is not followed by an argument list")]
    MalformedFunctionCall,

    #[error("misplaced ','")]
    MisplacedComma,

    #[error("empty group")]
    EmptyGroup,

    #[error("empty expression")]
    EmptyExpression,

    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
}

/// A single finding, positioned at a byte offset into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub position: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub(crate) fn new(position: usize, kind: DiagnosticKind) -> Self {
        Self { position, kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset {}: {}", self.position, self.kind)
    }
}

/// The outcome of one validation pass: valid exactly when no diagnostics
/// were produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    diagnostics: Vec<Diagnostic>,
}

impl Validation {
    pub(crate) fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Findings in scan order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            f.write_str("valid")
        } else {
            write!(f, "invalid ({} finding(s))", self.diagnostics.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_display() {
        let diag = Diagnostic::new(7, DiagnosticKind::UnknownFunction("bogusFunc".into()));
        assert_eq!(diag.to_string(), "offset 7: unknown function '@bogusFunc'");
    }

    #[test]
    fn arity_mismatch_display() {
        let diag = Diagnostic::new(
            0,
            DiagnosticKind::ArityMismatch {
                function: "trim".into(),
                expected: 1,
                found: 3,
            },
        );
        assert_eq!(
            diag.to_string(),
            "offset 0: function '@trim' expects 1 argument(s), got 3"
        );
    }

    #[test]
    fn empty_validation_is_valid() {
        let v = Validation::new(vec![]);
        assert!(v.is_valid());
        assert_eq!(v.to_string(), "valid");
    }

    #[test]
    fn findings_make_invalid() {
        let v = Validation::new(vec![Diagnostic::new(3, DiagnosticKind::MissingOperand)]);
        assert!(!v.is_valid());
        assert_eq!(v.diagnostics().len(), 1);
        assert_eq!(v.to_string(), "invalid (1 finding(s))");
    }
}
