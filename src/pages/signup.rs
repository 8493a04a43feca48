//! Activity board page: activity cards plus the sign-up form.

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::components::signup_form::SignupForm;
use crate::components::status_message::StatusBanner;
use crate::state::activities::{ActivitiesState, LoadPhase};

/// The single page of the application.
///
/// On mount it triggers the initial load, which fills both the card list
/// and the dropdown and resets the selection to the placeholder. All
/// later mutations go through the refresh path, which re-renders the
/// cards only.
#[component]
pub fn SignupPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        let activities = expect_context::<RwSignal<ActivitiesState>>();
        let form = expect_context::<RwSignal<crate::state::form::SignupFormState>>();
        crate::state::activities::spawn_load_all(activities, form);
    }

    view! {
        <header class="page-header">
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main class="page-main">
            <section class="activities-section">
                <h3>"Available Activities"</h3>
                <ActivityList/>
            </section>

            <section class="signup-section">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm/>
                <StatusBanner/>
            </section>
        </main>
    }
}

/// Card list area: loading placeholder, static failure message, or one
/// card per activity.
#[component]
fn ActivityList() -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();

    view! {
        <div class="activities-list">
            {move || {
                let state = activities.get();
                match state.phase {
                    LoadPhase::Loading => {
                        view! { <p>"Loading activities..."</p> }.into_any()
                    }
                    LoadPhase::Failed => {
                        view! {
                            <p class="error">
                                "Failed to load activities. Please try again later."
                            </p>
                        }
                            .into_any()
                    }
                    LoadPhase::Loaded => {
                        state
                            .items
                            .into_iter()
                            .map(|(name, activity)| {
                                view! { <ActivityCard name=name activity=activity/> }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
