//! Rule-based form state: values, errors and touched flags.
//!
//! DESIGN
//! ======
//! - State is only mutated through `Form` methods; getters hand out shared
//!   references.
//! - The errors map holds non-empty messages only. Recomputing a field to
//!   "no error" removes its entry, so an empty map means a valid form.
//! - Errors appear for a field once it is touched. `set_value` on an
//!   untouched field never produces an error.
//! - Fields keep their declaration order: initial values first, then
//!   ruled fields without one, then fields first seen by a mutation.
//!   `first_error` reports in that order, not alphabetically.
//!
//! TRADE-OFFS
//! ==========
//! `validate_all` walks the keys of `values`, not of `rules`. A rule for a
//! field that was never given an initial value is not checked. Forms built
//! from the presets always seed every ruled field, so this only matters for
//! hand-built forms.

pub mod presets;
pub mod rule;
pub mod strength;

use std::collections::{BTreeMap, BTreeSet};

pub use rule::{FieldRule, Values, validate_field};

/// Form state driven by a fixed rule set.
#[derive(Debug, Clone)]
pub struct Form {
    initial: Values,
    rules: BTreeMap<String, FieldRule>,
    values: Values,
    errors: BTreeMap<String, String>,
    touched: BTreeSet<String>,
    order: Vec<String>,
}

impl Form {
    /// Build a form from initial values and per-field rules.
    pub fn new<V, R, K1, S, K2>(initial_values: V, rules: R) -> Self
    where
        V: IntoIterator<Item = (K1, S)>,
        R: IntoIterator<Item = (K2, FieldRule)>,
        K1: Into<String>,
        S: Into<String>,
        K2: Into<String>,
    {
        let mut form = Self {
            initial: Values::new(),
            rules: BTreeMap::new(),
            values: Values::new(),
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            order: Vec::new(),
        };
        for (field, value) in initial_values {
            let field: String = field.into();
            form.remember(&field);
            form.initial.insert(field, value.into());
        }
        for (field, rule) in rules {
            let field: String = field.into();
            form.remember(&field);
            form.rules.insert(field, rule);
        }
        form.values = form.initial.clone();
        form
    }

    fn remember(&mut self, field: &str) {
        if !self.order.iter().any(|f| f == field) {
            self.order.push(field.to_owned());
        }
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Update a field's value. Revalidates it only if already touched.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        self.remember(field);
        self.values.insert(field.to_owned(), value.into());
        if self.touched.contains(field) {
            self.revalidate(field);
        }
    }

    /// Mark a field touched and validate its current value.
    pub fn set_field_touched(&mut self, field: &str) {
        self.remember(field);
        self.touched.insert(field.to_owned());
        self.revalidate(field);
    }

    /// Validate every field in `values`, mark them all touched, and return
    /// whether the form is free of errors.
    pub fn validate_all(&mut self) -> bool {
        let errors: BTreeMap<String, String> = self
            .values
            .iter()
            .filter_map(|(field, value)| {
                let msg = validate_field(&self.rules, field, value, &self.values);
                (!msg.is_empty()).then(|| (field.clone(), msg))
            })
            .collect();

        self.errors = errors;
        self.touched = self.values.keys().cloned().collect();
        self.errors.is_empty()
    }

    /// Restore initial values and clear errors and touched flags.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
        self.touched.clear();
    }

    fn revalidate(&mut self, field: &str) {
        let value = self.value(field);
        let msg = validate_field(&self.rules, field, value, &self.values);
        if msg.is_empty() {
            self.errors.remove(field);
        } else {
            self.errors.insert(field.to_owned(), msg);
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn values(&self) -> &Values {
        &self.values
    }

    /// Current value of `field`, or `""` when it has none.
    #[must_use]
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Stored error for `field`, or `""`.
    #[must_use]
    pub fn error(&self, field: &str) -> &str {
        self.errors.get(field).map_or("", String::as_str)
    }

    /// Error to display next to an input: hidden until the field is touched.
    #[must_use]
    pub fn visible_error(&self, field: &str) -> &str {
        if self.is_touched(field) { self.error(field) } else { "" }
    }

    /// First field, in declaration order, that carries an error.
    #[must_use]
    pub fn first_error(&self) -> Option<(&str, &str)> {
        self.order
            .iter()
            .find_map(|field| self.errors.get_key_value(field))
            .map(|(field, msg)| (field.as_str(), msg.as_str()))
    }

    /// Field names in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.order
    }

    #[must_use]
    pub fn touched(&self) -> &BTreeSet<String> {
        &self.touched
    }

    #[must_use]
    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// True when no field currently carries an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
