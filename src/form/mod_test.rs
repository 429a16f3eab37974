use super::*;
use super::rule::REQUIRED_MESSAGE;

fn name_form() -> Form {
    Form::new(
        [("name", ""), ("nickname", "")],
        [("name", FieldRule::new().required().min_length(2))],
    )
}

// =============================================================================
// set_value
// =============================================================================

#[test]
fn set_value_before_touch_never_sets_error() {
    let mut form = name_form();
    form.set_value("name", "");
    form.set_value("name", "x");
    assert_eq!(form.value("name"), "x");
    assert!(form.errors().is_empty());
    assert_eq!(form.error("name"), "");
}

#[test]
fn set_value_after_touch_revalidates() {
    let mut form = name_form();
    form.set_field_touched("name");
    assert_eq!(form.error("name"), REQUIRED_MESSAGE);

    form.set_value("name", "a");
    assert_eq!(form.error("name"), "Must be at least 2 characters");

    form.set_value("name", "ab");
    assert_eq!(form.error("name"), "");
    assert!(form.is_valid());
}

#[test]
fn set_value_leaves_other_fields_alone() {
    let mut form = Form::new(
        [("a", ""), ("b", "")],
        [("a", FieldRule::new().required()), ("b", FieldRule::new().required())],
    );
    form.set_field_touched("a");
    form.set_field_touched("b");
    form.set_value("a", "filled");
    assert_eq!(form.error("a"), "");
    assert_eq!(form.error("b"), REQUIRED_MESSAGE);
}

// =============================================================================
// set_field_touched
// =============================================================================

#[test]
fn touch_marks_and_validates() {
    let mut form = name_form();
    assert!(!form.is_touched("name"));
    form.set_field_touched("name");
    assert!(form.is_touched("name"));
    assert_eq!(form.error("name"), REQUIRED_MESSAGE);
}

#[test]
fn touch_field_without_rule_has_no_error() {
    let mut form = name_form();
    form.set_field_touched("nickname");
    assert!(form.is_touched("nickname"));
    assert_eq!(form.error("nickname"), "");
}

#[test]
fn touch_field_missing_from_values_validates_empty() {
    let mut form = Form::new([("other", "")], [("ghost", FieldRule::new().required())]);
    form.set_field_touched("ghost");
    assert_eq!(form.error("ghost"), REQUIRED_MESSAGE);
}

#[test]
fn visible_error_hidden_until_touched() {
    let mut form = name_form();
    form.validate_all();
    assert_eq!(form.visible_error("name"), REQUIRED_MESSAGE);
    form.reset();
    assert_eq!(form.visible_error("name"), "");
}

// =============================================================================
// validate_all
// =============================================================================

#[test]
fn validate_all_result_matches_error_map() {
    let mut form = name_form();
    assert!(!form.validate_all());
    assert!(!form.errors().is_empty());

    form.set_value("name", "Ada");
    assert!(form.validate_all());
    assert!(form.errors().is_empty());
}

#[test]
fn validate_all_touches_every_value_key() {
    let mut form = name_form();
    form.validate_all();
    assert!(form.is_touched("name"));
    assert!(form.is_touched("nickname"));
    assert_eq!(form.touched().len(), 2);
}

#[test]
fn validate_all_skips_rules_without_values() {
    let mut form = Form::new([("present", "ok")], [("absent", FieldRule::new().required())]);
    assert!(form.validate_all());
    assert!(!form.is_touched("absent"));
}

#[test]
fn validate_all_clears_stale_errors() {
    let mut form = name_form();
    form.set_field_touched("name");
    assert!(!form.is_valid());
    form.set_value("nickname", "n");
    form.values.insert("name".into(), "Grace".into());
    assert!(form.validate_all());
    assert_eq!(form.error("name"), "");
}

#[test]
fn custom_rule_reads_current_values() {
    let mut form = Form::new(
        [("password", ""), ("confirm", "")],
        [(
            "confirm",
            FieldRule::new().custom(|v, all| {
                (all.get("password").map(String::as_str) != Some(v)).then(|| "Passwords do not match".to_owned())
            }),
        )],
    );
    form.set_value("password", "abc");
    form.set_value("confirm", "abd");
    assert!(!form.validate_all());
    assert_eq!(form.error("confirm"), "Passwords do not match");

    form.set_value("confirm", "abc");
    assert_eq!(form.error("confirm"), "");
}

#[test]
fn first_error_follows_declaration_order() {
    let mut form = Form::new(
        [("b", ""), ("a", "")],
        [("a", FieldRule::new().required()), ("b", FieldRule::new().required())],
    );
    form.validate_all();
    assert_eq!(form.first_error(), Some(("b", REQUIRED_MESSAGE)));
    assert_eq!(form.fields(), ["b", "a"]);
}

#[test]
fn fields_added_later_come_last() {
    let mut form = Form::new([("z", "")], [("y", FieldRule::new().required())]);
    form.set_value("x", "1");
    form.set_value("z", "2");
    assert_eq!(form.fields(), ["z", "y", "x"]);
}

// =============================================================================
// reset
// =============================================================================

#[test]
fn reset_restores_initial_state() {
    let mut form = Form::new([("name", "start")], [("name", FieldRule::new().required())]);
    form.set_value("name", "");
    form.set_value("extra", "x");
    form.validate_all();

    form.reset();
    assert_eq!(form.value("name"), "start");
    assert_eq!(form.value("extra"), "");
    assert!(form.errors().is_empty());
    assert!(form.touched().is_empty());
}
