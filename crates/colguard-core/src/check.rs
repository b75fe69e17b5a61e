//! Column name contract checking
//!
//! The checker is a pure function over resolved models and a naming rule.
//! I/O, message printing, and exit handling live in the CLI.

use crate::rule::NamingRule;
use crate::violation::{Violation, ViolationKind};

/// A column as seen by the checker: its name and raw declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Column name
    pub name: String,

    /// Raw type string from the catalog; absent types never match the dtype
    pub data_type: Option<String>,
}

impl ColumnMeta {
    /// Create a column with a declared type
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: Some(data_type.into()),
        }
    }

    /// Create a column whose type is missing from the catalog
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: None,
        }
    }
}

/// A model's columns, already resolved against the requested file set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelColumns {
    /// Human-readable model name
    pub model_name: String,

    /// Columns in catalog order
    pub columns: Vec<ColumnMeta>,
}

/// Check every column of every model against the naming rule.
///
/// Violations come back in discovery order: models in the order given,
/// columns in each model's order. All columns are always visited - a
/// violation never short-circuits the rest of the run.
///
/// The two rule directions are one `if`/`else if`, not independent checks:
/// a column whose type matches the dtype is only ever examined by the
/// "type requires pattern" direction. With
/// `skip_check_every_column_for_dtype` set, such a column is not flagged
/// at all, even when its name matches the pattern.
pub fn check_models(models: &[ModelColumns], rule: &NamingRule) -> Vec<Violation> {
    let mut violations = Vec::new();

    for model in models {
        for column in &model.columns {
            let name_matches = rule.pattern.is_match(&column.name);
            let type_matches = column
                .data_type
                .as_deref()
                .map_or(false, |t| rule.dtype.is_match(t));

            // Every column of the expected type must follow the naming pattern
            if !rule.skip_check_every_column_for_dtype && type_matches {
                if !name_matches {
                    violations.push(Violation {
                        kind: ViolationKind::TypeWithoutPattern,
                        model_name: model.model_name.clone(),
                        column_name: column.name.clone(),
                        column_type: column.data_type.clone(),
                        pattern: rule.pattern.as_str().to_string(),
                        dtype: rule.dtype.as_str().to_string(),
                    });
                }
            // Every column following the naming pattern must be of the expected type
            } else if name_matches && !type_matches {
                violations.push(Violation {
                    kind: ViolationKind::PatternWithoutType,
                    model_name: model.model_name.clone(),
                    column_name: column.name.clone(),
                    column_type: column.data_type.clone(),
                    pattern: rule.pattern.as_str().to_string(),
                    dtype: rule.dtype.as_str().to_string(),
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rule(skip: bool) -> NamingRule {
        NamingRule::new("^is_", "^BOOLEAN$", skip).unwrap()
    }

    fn model(name: &str, columns: Vec<ColumnMeta>) -> ModelColumns {
        ModelColumns {
            model_name: name.to_string(),
            columns,
        }
    }

    #[test]
    fn matching_name_and_type_passes() {
        let models = vec![model("users", vec![ColumnMeta::new("is_active", "BOOLEAN")])];
        assert_eq!(check_models(&models, &rule(false)), vec![]);
    }

    #[test]
    fn typed_column_without_pattern_is_flagged() {
        let models = vec![model("users", vec![ColumnMeta::new("active_flag", "BOOLEAN")])];
        let violations = check_models(&models, &rule(false));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::TypeWithoutPattern);
        assert_eq!(violations[0].column_name, "active_flag");
        assert_eq!(violations[0].model_name, "users");
    }

    #[test]
    fn named_column_with_wrong_type_is_flagged() {
        let models = vec![model("users", vec![ColumnMeta::new("is_deleted", "VARCHAR")])];
        let violations = check_models(&models, &rule(false));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::PatternWithoutType);
        assert_eq!(violations[0].column_type.as_deref(), Some("VARCHAR"));
    }

    #[test]
    fn unrelated_column_passes() {
        let models = vec![model("users", vec![ColumnMeta::new("amount", "NUMERIC")])];
        assert_eq!(check_models(&models, &rule(false)), vec![]);
    }

    #[test]
    fn skip_flag_disables_type_direction() {
        let models = vec![model("users", vec![ColumnMeta::new("active_flag", "BOOLEAN")])];
        assert_eq!(check_models(&models, &rule(true)), vec![]);
    }

    #[test]
    fn type_matching_column_is_never_flagged_for_its_name() {
        // Even with the skip flag set and a name that matches the pattern,
        // a column whose type already matches the dtype stays silent.
        let models = vec![model("users", vec![ColumnMeta::new("is_active", "BOOLEAN")])];
        assert_eq!(check_models(&models, &rule(true)), vec![]);
    }

    #[test]
    fn missing_type_is_not_a_dtype_match() {
        let models = vec![model("users", vec![ColumnMeta::untyped("is_active")])];
        let violations = check_models(&models, &rule(false));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::PatternWithoutType);
        assert_eq!(violations[0].column_type, None);
    }

    #[test]
    fn missing_type_without_pattern_passes() {
        let models = vec![model("users", vec![ColumnMeta::untyped("amount")])];
        assert_eq!(check_models(&models, &rule(false)), vec![]);
    }

    #[test]
    fn dtype_prefix_semantics_apply_to_types() {
        // An unanchored dtype matches type strings by prefix
        let rule = NamingRule::new("^ts_", "TIMESTAMP", false).unwrap();
        let models = vec![model(
            "events",
            vec![ColumnMeta::new("created_at", "TIMESTAMP WITH TIME ZONE")],
        )];
        let violations = check_models(&models, &rule);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::TypeWithoutPattern);
    }

    #[test]
    fn all_columns_are_visited() {
        let models = vec![
            model(
                "users",
                vec![
                    ColumnMeta::new("active_flag", "BOOLEAN"),
                    ColumnMeta::new("is_deleted", "VARCHAR"),
                ],
            ),
            model("orders", vec![ColumnMeta::new("paid_flag", "BOOLEAN")]),
        ];
        let violations = check_models(&models, &rule(false));
        assert_eq!(violations.len(), 3);
        // Discovery order: models in the order given, columns per model
        assert_eq!(violations[0].column_name, "active_flag");
        assert_eq!(violations[1].column_name, "is_deleted");
        assert_eq!(violations[2].column_name, "paid_flag");
        assert_eq!(violations[2].model_name, "orders");
    }

    #[test]
    fn checking_twice_is_idempotent() {
        let models = vec![model(
            "users",
            vec![
                ColumnMeta::new("active_flag", "BOOLEAN"),
                ColumnMeta::new("is_deleted", "VARCHAR"),
            ],
        )];
        let rule = rule(false);
        assert_eq!(check_models(&models, &rule), check_models(&models, &rule));
    }

    #[test]
    fn empty_model_set_yields_no_violations() {
        assert_eq!(check_models(&[], &rule(false)), vec![]);
    }
}
