use thiserror::Error;

/// Errors raised while assembling the value model. Construction never
/// silently repairs bad input; the offending call fails outright.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("property reference name is empty")]
    EmptyPropertyName,

    #[error("rule name is empty")]
    EmptyRuleName,

    #[error("condition group has no children")]
    EmptyGroup,

    #[error("function '{function}' expects {expected} argument(s), got {found}")]
    ArityMismatch {
        function: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("function '{function}' argument {position} must be {expected}")]
    ArgumentType {
        function: &'static str,
        position: usize,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_property_name_message() {
        assert_eq!(
            BuildError::EmptyPropertyName.to_string(),
            "property reference name is empty"
        );
    }

    #[test]
    fn arity_mismatch_message() {
        let err = BuildError::ArityMismatch {
            function: "trim",
            expected: 1,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "function 'trim' expects 1 argument(s), got 2"
        );
    }

    #[test]
    fn argument_type_message() {
        let err = BuildError::ArgumentType {
            function: "greaterThan",
            position: 2,
            expected: "a numeric value",
        };
        assert_eq!(
            err.to_string(),
            "function 'greaterThan' argument 2 must be a numeric value"
        );
    }

    #[test]
    fn empty_group_message() {
        assert_eq!(
            BuildError::EmptyGroup.to_string(),
            "condition group has no children"
        );
    }
}
