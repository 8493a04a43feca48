//! UI components for the activity sign-up page.

pub mod activity_card;
pub mod signup_form;
pub mod status_message;
