//! Report schema (stable v1)
//!
//! The JSON report written by `--output`. The schema is versioned;
//! breaking changes require a new major version.

use serde::{Deserialize, Serialize};

use crate::violation::{Violation, ViolationKind};

/// Report schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportVersion {
    /// Major version (breaking changes)
    pub major: u32,

    /// Minor version (backward-compatible additions)
    pub minor: u32,
}

impl ReportVersion {
    /// Current report schema version
    pub const CURRENT: ReportVersion = ReportVersion { major: 1, minor: 0 };
}

impl std::fmt::Display for ReportVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Summary statistics for a check run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total number of violations
    pub total: usize,

    /// Columns of the expected type whose name misses the pattern
    pub type_without_pattern: usize,

    /// Columns matching the pattern whose type is not the expected one
    pub pattern_without_type: usize,

    /// Number of models resolved and checked
    pub models_checked: usize,
}

/// Check report (report.json v1)
///
/// The stable serialized output format; all fields are backward-compatible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version
    pub version: ReportVersion,

    /// Timestamp (ISO 8601)
    pub timestamp: String,

    /// Summary statistics
    pub summary: ReportSummary,

    /// All violations, in discovery order
    pub violations: Vec<Violation>,
}

impl Report {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            version: ReportVersion::CURRENT,
            timestamp: chrono::Utc::now().to_rfc3339(),
            summary: ReportSummary::default(),
            violations: Vec::new(),
        }
    }

    /// Create a report from the checker's output
    pub fn from_violations(violations: Vec<Violation>, models_checked: usize) -> Self {
        let summary = ReportSummary {
            total: violations.len(),
            type_without_pattern: violations
                .iter()
                .filter(|v| v.kind == ViolationKind::TypeWithoutPattern)
                .count(),
            pattern_without_type: violations
                .iter()
                .filter(|v| v.kind == ViolationKind::PatternWithoutType)
                .count(),
            models_checked,
        };

        Self {
            version: ReportVersion::CURRENT,
            timestamp: chrono::Utc::now().to_rfc3339(),
            summary,
            violations,
        }
    }

    /// Check if any violation was found
    pub fn has_violations(&self) -> bool {
        self.summary.total > 0
    }

    /// Process exit status for this report: 1 when violations exist, else 0
    pub fn exit_code(&self) -> i32 {
        if self.has_violations() {
            1
        } else {
            0
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Save to file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let json = self
            .to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn violation(kind: ViolationKind, column: &str) -> Violation {
        Violation {
            kind,
            model_name: "users".to_string(),
            column_name: column.to_string(),
            column_type: Some("BOOLEAN".to_string()),
            pattern: "^is_".to_string(),
            dtype: "^BOOLEAN$".to_string(),
        }
    }

    #[test]
    fn empty_report() {
        let report = Report::new();
        assert_eq!(report.version, ReportVersion::CURRENT);
        assert_eq!(report.summary.total, 0);
        assert!(!report.has_violations());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn report_counts_by_kind() {
        let report = Report::from_violations(
            vec![
                violation(ViolationKind::TypeWithoutPattern, "active_flag"),
                violation(ViolationKind::TypeWithoutPattern, "deleted_flag"),
                violation(ViolationKind::PatternWithoutType, "is_deleted"),
            ],
            5,
        );
        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.type_without_pattern, 2);
        assert_eq!(report.summary.pattern_without_type, 1);
        assert_eq!(report.summary.models_checked, 5);
        assert!(report.has_violations());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn clean_run_with_checked_models() {
        let report = Report::from_violations(Vec::new(), 3);
        assert_eq!(report.summary.models_checked, 3);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn report_serialization() {
        let report = Report::from_violations(
            vec![violation(ViolationKind::TypeWithoutPattern, "active_flag")],
            1,
        );
        let json = report.to_json().unwrap();
        assert!(json.contains("\"version\""));
        assert!(json.contains("\"violations\""));
        assert!(json.contains("TYPE_WITHOUT_PATTERN"));
    }

    #[test]
    fn version_display() {
        assert_eq!(ReportVersion::CURRENT.to_string(), "1.0");
    }
}
