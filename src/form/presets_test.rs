use super::*;

fn fill(form: &mut Form, pairs: &[(&str, &str)]) {
    for (field, value) in pairs {
        form.set_value(field, *value);
    }
}

// =============================================================================
// login_form
// =============================================================================

#[test]
fn login_accepts_demo_credentials() {
    let mut form = login_form();
    fill(&mut form, &[(FIELD_EMAIL, "demo@example.com"), (FIELD_PASSWORD, "password123")]);
    assert!(form.validate_all());
}

#[test]
fn login_rejects_malformed_email() {
    let mut form = login_form();
    fill(&mut form, &[(FIELD_EMAIL, "demo@example"), (FIELD_PASSWORD, "password123")]);
    assert!(!form.validate_all());
    assert_eq!(form.error(FIELD_EMAIL), "Invalid format");
}

#[test]
fn login_rejects_email_with_spaces() {
    let mut form = login_form();
    fill(&mut form, &[(FIELD_EMAIL, "de mo@example.com"), (FIELD_PASSWORD, "password123")]);
    assert!(!form.validate_all());
}

#[test]
fn login_short_password() {
    let mut form = login_form();
    fill(&mut form, &[(FIELD_EMAIL, "demo@example.com"), (FIELD_PASSWORD, "ab")]);
    assert!(!form.validate_all());
    assert_eq!(form.error(FIELD_PASSWORD), "Must be at least 6 characters");
}

// =============================================================================
// signup_form
// =============================================================================

fn valid_signup() -> Form {
    let mut form = signup_form();
    fill(
        &mut form,
        &[
            (FIELD_NAME, "Ada"),
            (FIELD_EMAIL, "ada@example.com"),
            (FIELD_PASSWORD, "Passw0rd"),
            (FIELD_CONFIRM_PASSWORD, "Passw0rd"),
        ],
    );
    form
}

#[test]
fn signup_accepts_valid_input() {
    let mut form = valid_signup();
    assert!(form.validate_all());
}

#[test]
fn signup_name_bounds() {
    let mut form = valid_signup();
    form.set_value(FIELD_NAME, "A");
    form.validate_all();
    assert_eq!(form.error(FIELD_NAME), "Must be at least 2 characters");

    form.set_value(FIELD_NAME, "x".repeat(51));
    assert_eq!(form.error(FIELD_NAME), "Must be no more than 50 characters");
}

#[test]
fn signup_password_composition_messages() {
    let mut form = valid_signup();
    form.set_field_touched(FIELD_PASSWORD);

    form.set_value(FIELD_PASSWORD, "PASSW0RD");
    assert_eq!(form.error(FIELD_PASSWORD), "Password must contain at least one lowercase letter");

    form.set_value(FIELD_PASSWORD, "passw0rd");
    assert_eq!(form.error(FIELD_PASSWORD), "Password must contain at least one uppercase letter");

    form.set_value(FIELD_PASSWORD, "Password");
    assert_eq!(form.error(FIELD_PASSWORD), "Password must contain at least one number");
}

#[test]
fn signup_short_password_reports_length_first() {
    let mut form = valid_signup();
    form.set_field_touched(FIELD_PASSWORD);
    form.set_value(FIELD_PASSWORD, "ab");
    assert_eq!(form.error(FIELD_PASSWORD), "Must be at least 8 characters");
}

#[test]
fn signup_confirmation_must_match() {
    let mut form = valid_signup();
    form.set_value(FIELD_CONFIRM_PASSWORD, "Mismatch1");
    assert!(!form.validate_all());
    assert_eq!(form.error(FIELD_CONFIRM_PASSWORD), "Passwords do not match");
    assert_eq!(form.error(FIELD_PASSWORD), "");
}

#[test]
fn signup_confirmation_not_rechecked_on_password_edit() {
    let mut form = valid_signup();
    form.validate_all();
    form.set_value(FIELD_PASSWORD, "Changed99");
    assert_eq!(form.error(FIELD_CONFIRM_PASSWORD), "");
    assert!(!form.validate_all());
}

#[test]
fn composition_helper_accepts_mixed() {
    assert_eq!(password_composition_error("aB3"), None);
}
