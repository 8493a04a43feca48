//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::signup::SignupPage;
use crate::state::activities::ActivitiesState;
use crate::state::form::SignupFormState;
use crate::state::status::StatusState;

/// Root application component.
///
/// Provides the shared state contexts and renders the single sign-up
/// page. Components reach their state through context rather than
/// module-level globals, and events are wired through listeners rather
/// than inline handler attributes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let activities = RwSignal::new(ActivitiesState::default());
    let form = RwSignal::new(SignupFormState::default());
    let status = RwSignal::new(StatusState::default());

    provide_context(activities);
    provide_context(form);
    provide_context(status);

    view! {
        <Title text="Mergington High School Activities"/>
        <SignupPage/>
    }
}
