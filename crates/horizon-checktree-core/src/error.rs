//! Error types for Horizon Checktree.
//!
//! Every error here is raised while building a model (or re-deriving its
//! check state from a list of keys). Mutators such as toggling never fail;
//! unknown keys are ignored instead.

use std::fmt;

use crate::value::NodeValue;

/// Result type alias for tree model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// What is wrong with a radio group's initial selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioGroupProblem {
    /// No child of the group is checked.
    NoneChecked,
    /// More than one child is checked; carries the number found.
    TooManyChecked(usize),
}

impl fmt::Display for RadioGroupProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoneChecked => write!(f, "no child is checked"),
            Self::TooManyChecked(count) => write!(f, "{count} children are checked"),
        }
    }
}

/// Errors that can occur while building a tree model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two nodes share the same value.
    #[error("Duplicate node value '{value}'")]
    DuplicateValue { value: NodeValue },

    /// A node lacks its `value` or `label`.
    #[error("Node {location} is missing required field '{field}'")]
    MissingField {
        field: &'static str,
        location: String,
    },

    /// A radio group does not have exactly one checked child.
    #[error("Radio group '{group}' must have exactly one checked child: {problem}")]
    RadioGroup {
        group: NodeValue,
        problem: RadioGroupProblem,
    },

    /// An option was given a value it does not recognize.
    #[error("Invalid value '{value}' for option '{option}'")]
    InvalidOption {
        option: &'static str,
        value: String,
    },

    /// Node list or options could not be parsed.
    #[error("Malformed tree JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a duplicate value error.
    pub fn duplicate_value(value: NodeValue) -> Self {
        Self::DuplicateValue { value }
    }

    /// Create a missing field error.
    ///
    /// `location` describes where the node sits, since a node without a
    /// value has no key to name it by.
    pub fn missing_field(field: &'static str, location: impl Into<String>) -> Self {
        Self::MissingField {
            field,
            location: location.into(),
        }
    }

    /// Create a radio group error.
    pub fn radio_group(group: NodeValue, problem: RadioGroupProblem) -> Self {
        Self::RadioGroup { group, problem }
    }

    /// Create an invalid option error.
    pub fn invalid_option(option: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidOption {
            option,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radio_group_message() {
        let err = Error::radio_group(
            NodeValue::from("colors"),
            RadioGroupProblem::TooManyChecked(2),
        );
        assert_eq!(
            err.to_string(),
            "Radio group 'colors' must have exactly one checked child: 2 children are checked"
        );

        let err = Error::radio_group(NodeValue::from(7), RadioGroupProblem::NoneChecked);
        assert!(err.to_string().contains("no child is checked"));
    }

    #[test]
    fn test_missing_field_message() {
        let err = Error::missing_field("label", "'0-1'");
        assert_eq!(
            err.to_string(),
            "Node '0-1' is missing required field 'label'"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("[");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
    }
}
