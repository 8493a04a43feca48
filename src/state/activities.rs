#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use crate::net::api::ApiError;
use crate::net::types::ActivityMap;

/// Where the activity list stands with respect to the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Initial fetch still in flight.
    #[default]
    Loading,
    /// Collection fetched and rendered.
    Loaded,
    /// Last fetch failed; the list area shows a static failure message.
    Failed,
}

/// The rendered activity collection plus its load phase.
///
/// The collection is replaced wholesale on every successful fetch; a
/// failed fetch flips the phase but keeps whatever was held before, so
/// a later retry starts from the same place.
#[derive(Clone, Debug, Default)]
pub struct ActivitiesState {
    pub items: ActivityMap,
    pub phase: LoadPhase,
}

impl ActivitiesState {
    /// Fold a fetch outcome into the state.
    pub fn apply_fetch(&mut self, result: Result<ActivityMap, ApiError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = LoadPhase::Loaded;
            }
            Err(_) => self.phase = LoadPhase::Failed,
        }
    }

    /// Activity names in render order, used for the dropdown options.
    pub fn names(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }
}

/// Initial load: fetch the collection, fill the list, and reset the
/// dropdown to the placeholder. On failure the selection is left alone.
#[cfg(feature = "csr")]
pub fn spawn_load_all(
    activities: leptos::prelude::RwSignal<ActivitiesState>,
    form: leptos::prelude::RwSignal<crate::state::form::SignupFormState>,
) {
    use leptos::prelude::Update;

    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_activities().await {
            Ok(items) => {
                activities.update(|state| state.apply_fetch(Ok(items)));
                form.update(super::form::SignupFormState::reset_selection);
            }
            Err(err) => {
                log::error!("failed to load activities: {err}");
                activities.update(|state| state.apply_fetch(Err(err)));
            }
        }
    });
}

/// Re-fetch after a mutating action. Renders the same way as the initial
/// load but never touches the sign-up form, so the user's in-progress
/// dropdown choice survives.
#[cfg(feature = "csr")]
pub async fn refresh_list(activities: leptos::prelude::RwSignal<ActivitiesState>) {
    use leptos::prelude::Update;

    let result = crate::net::api::fetch_activities().await;
    if let Err(err) = &result {
        log::error!("failed to refresh activities: {err}");
    }
    activities.update(|state| state.apply_fetch(result));
}
