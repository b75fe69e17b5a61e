//! Colguard Core
//!
//! Core domain model for column name contract checking: the naming rule,
//! the checker itself, violation codes, and the report schema.
//! Violation codes are stable and part of the report format - never rename
//! them, only add new ones.

pub mod check;
pub mod config;
pub mod report;
pub mod rule;
pub mod violation;

pub use check::{check_models, ColumnMeta, ModelColumns};
pub use config::{Config, ConfigError, RuleDefaults};
pub use report::{Report, ReportSummary, ReportVersion};
pub use rule::{NamingRule, PrefixPattern, RuleError};
pub use violation::{Violation, ViolationKind};
