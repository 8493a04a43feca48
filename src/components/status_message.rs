//! Shared status region reporting the outcome of the last action.

use leptos::prelude::*;

use crate::state::status::{StatusKind, StatusState};

/// Transient banner below the forms. Hidden while idle; shows the last
/// outcome with a success or error style until its timer clears it.
#[component]
pub fn StatusBanner() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();

    view! {
        {move || {
            status
                .get()
                .current
                .map(|msg| {
                    let class = match msg.kind {
                        StatusKind::Success => "message message--success",
                        StatusKind::Error => "message message--error",
                    };
                    view! { <div class=class role="status">{msg.text}</div> }
                })
        }}
    }
}
