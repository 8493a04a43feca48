#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Sign-up form fields: the participant email and the chosen activity.
///
/// The empty string doubles as the "none selected" placeholder value of
/// the dropdown. No client-side validation happens here; the backend
/// owns duplicate and format checks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupFormState {
    pub email: String,
    pub activity: String,
}

impl SignupFormState {
    /// Clear both fields, as after a successful signup.
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }

    /// Reset only the dropdown to the placeholder, as on initial load.
    pub fn reset_selection(&mut self) {
        self.activity.clear();
    }
}
