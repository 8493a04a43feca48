use super::*;

#[test]
fn form_starts_empty() {
    let form = SignupFormState::default();
    assert!(form.email.is_empty());
    assert!(form.activity.is_empty());
}

#[test]
fn reset_clears_both_fields() {
    let mut form = SignupFormState {
        email: "test@mergington.edu".to_owned(),
        activity: "Chess Club".to_owned(),
    };
    form.reset();
    assert_eq!(form, SignupFormState::default());
}

#[test]
fn reset_selection_keeps_the_email() {
    let mut form = SignupFormState {
        email: "test@mergington.edu".to_owned(),
        activity: "Chess Club".to_owned(),
    };
    form.reset_selection();
    assert_eq!(form.email, "test@mergington.edu");
    assert!(form.activity.is_empty());
}
