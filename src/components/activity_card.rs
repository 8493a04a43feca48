//! Card rendering one activity with its roster and removal controls.

use leptos::prelude::*;

use crate::net::types::Activity;
use crate::state::activities::ActivitiesState;
use crate::state::status::StatusState;

/// One activity card: name, description, schedule, remaining capacity,
/// and the participant list. Every roster row carries a removal control
/// bound to that (activity, email) pair; an empty roster renders a
/// placeholder instead. Emails are emitted as text nodes, never spliced
/// into markup strings.
#[component]
pub fn ActivityCard(name: String, activity: Activity) -> impl IntoView {
    let spots = format!("{} spots left", activity.spots_left());

    let roster = if activity.participants.is_empty() {
        view! { <p class="no-participants"><em>"No participants yet"</em></p> }.into_any()
    } else {
        let rows = activity
            .participants
            .iter()
            .map(|email| {
                view! { <ParticipantRow activity=name.clone() email=email.clone()/> }
            })
            .collect::<Vec<_>>();
        view! { <ul class="participants-list">{rows}</ul> }.into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{name.clone()}</h4>
            <p>{activity.description.clone()}</p>
            <p><strong>"Schedule: "</strong>{activity.schedule.clone()}</p>
            <p><strong>"Availability: "</strong>{spots}</p>
            <div class="participants-section">
                <h5>"Participants"</h5>
                {roster}
            </div>
        </div>
    }
}

/// A single roster row with its unregister button.
///
/// Clicking the button issues the deletion request, reports the outcome
/// in the status region, and refreshes the list on success. The dropdown
/// selection is untouched by the refresh.
#[component]
fn ParticipantRow(activity: String, email: String) -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let status = expect_context::<RwSignal<StatusState>>();

    let shown_email = email.clone();
    let on_delete = move |_| {
        #[cfg(feature = "csr")]
        {
            let activity = activity.clone();
            let email = email.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::unregister(&activity, &email).await {
                    Ok(message) => {
                        crate::state::status::show_transient(
                            status,
                            message,
                            crate::state::status::StatusKind::Success,
                        );
                        crate::state::activities::refresh_list(activities).await;
                    }
                    Err(err) => {
                        log::error!("unregister failed: {err}");
                        crate::state::status::show_transient(
                            status,
                            err.user_message("Failed to unregister. Please try again."),
                            crate::state::status::StatusKind::Error,
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&activity, &email, &activities, &status);
        }
    };

    view! {
        <li class="participant-row">
            <span class="participant-email">{shown_email}</span>
            <button class="delete-btn" type="button" title="Unregister" on:click=on_delete>
                "✕"
            </button>
        </li>
    }
}
