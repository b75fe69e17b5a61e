//! Violation codes and message formatting
//!
//! Violation codes are stable and serialized into report.json.
//! Do NOT rename or remove codes - only add new ones.

use serde::{Deserialize, Serialize};

/// Which direction of the column name contract was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// Column has the expected data type but its name misses the naming pattern
    TypeWithoutPattern,

    /// Column name matches the naming pattern but its type is not the expected one
    PatternWithoutType,
}

impl ViolationKind {
    /// Get the violation code as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeWithoutPattern => "TYPE_WITHOUT_PATTERN",
            Self::PatternWithoutType => "PATTERN_WITHOUT_TYPE",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single broken column name contract.
///
/// Produced by the checker and reported immediately; carries everything the
/// message needs so rendering never has to look back at the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Stable violation code
    pub kind: ViolationKind,

    /// Model the column belongs to (the catalog's `metadata.name`)
    pub model_name: String,

    /// Column name
    pub column_name: String,

    /// Raw column type from the catalog, if declared
    pub column_type: Option<String>,

    /// Naming pattern the rule was invoked with
    pub pattern: String,

    /// Expected type pattern the rule was invoked with
    pub dtype: String,
}

impl Violation {
    /// Render the one-line human-readable message for this violation.
    ///
    /// These lines are the tool's primary output and are consumed by CI
    /// logs and snapshot tests; the wording is part of the contract.
    pub fn message(&self) -> String {
        match self.kind {
            ViolationKind::TypeWithoutPattern => format!(
                "{}: {}: column is of type {} and does not match regex pattern {}.",
                self.model_name, self.column_name, self.dtype, self.pattern,
            ),
            ViolationKind::PatternWithoutType => format!(
                "{}: {}: column name matches regex pattern {} and is of type {} instead of {}.",
                self.model_name,
                self.column_name,
                self.pattern,
                self.column_type.as_deref().unwrap_or("unknown"),
                self.dtype,
            ),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn violation(kind: ViolationKind, column_type: Option<&str>) -> Violation {
        Violation {
            kind,
            model_name: "fct_orders".to_string(),
            column_name: "is_deleted".to_string(),
            column_type: column_type.map(str::to_string),
            pattern: "^is_".to_string(),
            dtype: "^BOOLEAN$".to_string(),
        }
    }

    #[test]
    fn violation_code_stability() {
        assert_eq!(ViolationKind::TypeWithoutPattern.as_str(), "TYPE_WITHOUT_PATTERN");
        assert_eq!(ViolationKind::PatternWithoutType.as_str(), "PATTERN_WITHOUT_TYPE");
    }

    #[test]
    fn type_without_pattern_message() {
        let v = violation(ViolationKind::TypeWithoutPattern, Some("BOOLEAN"));
        assert_eq!(
            v.message(),
            "fct_orders: is_deleted: column is of type ^BOOLEAN$ \
             and does not match regex pattern ^is_."
        );
    }

    #[test]
    fn pattern_without_type_message() {
        let v = violation(ViolationKind::PatternWithoutType, Some("character varying"));
        assert_eq!(
            v.message(),
            "fct_orders: is_deleted: column name matches regex pattern ^is_ \
             and is of type character varying instead of ^BOOLEAN$."
        );
    }

    #[test]
    fn missing_type_renders_as_unknown() {
        let v = violation(ViolationKind::PatternWithoutType, None);
        assert!(v.message().contains("is of type unknown instead of"));
    }

    #[test]
    fn violation_serialization() {
        let v = violation(ViolationKind::TypeWithoutPattern, Some("BOOLEAN"));
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("TYPE_WITHOUT_PATTERN"));
        assert!(json.contains("fct_orders"));
    }
}
