//! Sign-up form: email input, activity dropdown, submit button.

use leptos::prelude::*;

use crate::state::activities::ActivitiesState;
use crate::state::form::SignupFormState;
use crate::state::status::StatusState;

/// Registration form. The dropdown lists the placeholder first, then one
/// option per activity in render order. Submission posts the signup, and
/// on success shows the backend confirmation, clears both fields, and
/// refreshes the list. Field presence is enforced by the `required`
/// attributes only; duplicate and format checks belong to the backend.
#[component]
pub fn SignupForm() -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let form = expect_context::<RwSignal<SignupFormState>>();
    let status = expect_context::<RwSignal<StatusState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let SignupFormState { email, activity } = form.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&activity, &email).await {
                    Ok(message) => {
                        crate::state::status::show_transient(
                            status,
                            message,
                            crate::state::status::StatusKind::Success,
                        );
                        form.update(SignupFormState::reset);
                        crate::state::activities::refresh_list(activities).await;
                    }
                    Err(err) => {
                        log::error!("signup failed: {err}");
                        crate::state::status::show_transient(
                            status,
                            err.user_message("Failed to sign up. Please try again."),
                            crate::state::status::StatusKind::Error,
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = status;
        }
    };

    view! {
        <form class="signup-form" on:submit=on_submit>
            <label class="signup-form__field">
                "Student Email:"
                <input
                    type="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || form.get().email
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </label>
            <label class="signup-form__field">
                "Select Activity:"
                <select
                    required
                    prop:value=move || form.get().activity
                    on:change=move |ev| form.update(|f| f.activity = event_target_value(&ev))
                >
                    <option value="">"-- Select an activity --"</option>
                    {move || {
                        activities
                            .get()
                            .names()
                            .into_iter()
                            .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <button type="submit" class="btn btn--primary">"Sign Up"</button>
        </form>
    }
}
