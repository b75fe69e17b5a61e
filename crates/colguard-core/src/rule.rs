//! Naming rule configuration
//!
//! A rule ties a column naming pattern to an expected data type. Both are
//! regexes with prefix-match semantics: the pattern is satisfied if it
//! matches starting at the beginning of the target string, without having
//! to consume all of it. `is_` and `^is_` therefore behave identically.

use regex::Regex;

/// A regex checked against the start of a string.
///
/// Compiled as `\A(?:...)` so the user-supplied pattern is anchored at the
/// beginning of the target but may leave a suffix unmatched.
#[derive(Debug, Clone)]
pub struct PrefixPattern {
    raw: String,
    regex: Regex,
}

impl PrefixPattern {
    /// Compile a prefix pattern from a user-supplied regex
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        let regex = Regex::new(&format!(r"\A(?:{})", pattern))
            .map_err(|e| RuleError::InvalidPattern(pattern.to_string(), e.to_string()))?;

        Ok(Self {
            raw: pattern.to_string(),
            regex,
        })
    }

    /// Whether the pattern matches at the start of `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The pattern as the user supplied it
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for PrefixPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// The column name contract checked against every resolved model.
#[derive(Debug, Clone)]
pub struct NamingRule {
    /// Naming pattern for column names
    pub pattern: PrefixPattern,

    /// Expected data type pattern for the matching columns
    pub dtype: PrefixPattern,

    /// Disable the "every column of this type follows the pattern" direction
    pub skip_check_every_column_for_dtype: bool,
}

impl NamingRule {
    /// Build a rule from raw regex strings
    pub fn new(
        pattern: &str,
        dtype: &str,
        skip_check_every_column_for_dtype: bool,
    ) -> Result<Self, RuleError> {
        Ok(Self {
            pattern: PrefixPattern::new(pattern)?,
            dtype: PrefixPattern::new(dtype)?,
            skip_check_every_column_for_dtype,
        })
    }
}

/// Rule construction errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid regex pattern '{0}': {1}")]
    InvalidPattern(String, String),
}
