//! Rule sets for the login and signup forms.

use std::sync::LazyLock;

use regex::Regex;

use super::{FieldRule, Form};

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_CONFIRM_PASSWORD: &str = "confirmPassword";

const LOGIN_PASSWORD_MIN: usize = 6;
const SIGNUP_PASSWORD_MIN: usize = 8;
const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

fn email_rule() -> FieldRule {
    FieldRule::new().required().pattern(EMAIL_REGEX.clone())
}

/// Signup password composition check.
#[must_use]
pub fn password_composition_error(value: &str) -> Option<String> {
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter".to_owned());
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter".to_owned());
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number".to_owned());
    }
    None
}

/// Email + password login form.
#[must_use]
pub fn login_form() -> Form {
    Form::new(
        [(FIELD_EMAIL, ""), (FIELD_PASSWORD, "")],
        [
            (FIELD_EMAIL, email_rule()),
            (FIELD_PASSWORD, FieldRule::new().required().min_length(LOGIN_PASSWORD_MIN)),
        ],
    )
}

/// Name, email, password and confirmation signup form.
#[must_use]
pub fn signup_form() -> Form {
    Form::new(
        [
            (FIELD_NAME, ""),
            (FIELD_EMAIL, ""),
            (FIELD_PASSWORD, ""),
            (FIELD_CONFIRM_PASSWORD, ""),
        ],
        [
            (FIELD_NAME, FieldRule::new().required().min_length(NAME_MIN).max_length(NAME_MAX)),
            (FIELD_EMAIL, email_rule()),
            (
                FIELD_PASSWORD,
                FieldRule::new()
                    .required()
                    .min_length(SIGNUP_PASSWORD_MIN)
                    .custom(|value, _| password_composition_error(value)),
            ),
            (
                FIELD_CONFIRM_PASSWORD,
                FieldRule::new().required().custom(|value, values| {
                    let password = values.get(FIELD_PASSWORD).map_or("", String::as_str);
                    (value != password).then(|| "Passwords do not match".to_owned())
                }),
            ),
        ],
    )
}

#[cfg(test)]
#[path = "presets_test.rs"]
mod tests;
