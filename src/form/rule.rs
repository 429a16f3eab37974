//! Declarative per-field constraints.
//!
//! DESIGN
//! ======
//! Checks run in a fixed order and the first failure wins:
//! required → min length → max length → pattern → custom.
//! Lengths count Unicode scalar values, not bytes.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

/// Message for an empty or whitespace-only required field.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Message for a value that does not match the configured pattern.
pub const PATTERN_MESSAGE: &str = "Invalid format";

/// Current form values keyed by field name.
pub type Values = BTreeMap<String, String>;

/// Custom check: receives the field value and every current form value,
/// returns an error message or `None`.
pub type CustomCheck = Arc<dyn Fn(&str, &Values) -> Option<String> + Send + Sync>;

/// Constraints for one field. Built once, never mutated by the form.
#[derive(Clone, Default)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    custom: Option<CustomCheck>,
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl FieldRule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    #[must_use]
    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    #[must_use]
    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(&str, &Values) -> Option<String> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(check));
        self
    }

    /// Run every configured check against `value`. Returns the first
    /// failure message, or `None` when the value passes.
    #[must_use]
    pub fn check(&self, value: &str, values: &Values) -> Option<String> {
        if self.required && value.trim().is_empty() {
            return Some(REQUIRED_MESSAGE.to_owned());
        }

        let len = value.chars().count();

        // Zero bounds count as unset.
        if let Some(min) = self.min_length.filter(|n| *n > 0) {
            if len < min {
                return Some(format!("Must be at least {min} characters"));
            }
        }

        if let Some(max) = self.max_length.filter(|n| *n > 0) {
            if len > max {
                return Some(format!("Must be no more than {max} characters"));
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                return Some(PATTERN_MESSAGE.to_owned());
            }
        }

        self.custom
            .as_ref()
            .and_then(|check| check(value, values))
            .filter(|msg| !msg.is_empty())
    }
}

/// Validate `value` for `field` against `rules`. A field without a rule
/// always passes and yields an empty string.
#[must_use]
pub fn validate_field(rules: &BTreeMap<String, FieldRule>, field: &str, value: &str, values: &Values) -> String {
    rules
        .get(field)
        .and_then(|rule| rule.check(value, values))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "rule_test.rs"]
mod tests;
