#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// How long an outcome message stays visible in the status region.
pub const STATUS_VISIBLE_MS: u32 = 5000;

/// Visual flavor of a status message; drives the CSS class only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// One transient outcome message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Shared status region lifecycle: `idle -> shown -> idle` after the
/// visibility window, re-entrant when a new action lands while a message
/// is still up.
///
/// Every [`show`](Self::show) hands out a ticket; the delayed hide only
/// clears the region if its ticket is still current. A stale timer from
/// a superseded message is a no-op, so each message keeps its full
/// window.
#[derive(Clone, Debug, Default)]
pub struct StatusState {
    pub current: Option<StatusMessage>,
    seq: u64,
}

impl StatusState {
    /// Display a new message, superseding any visible one. Returns the
    /// ticket the matching [`clear_if`](Self::clear_if) must present.
    pub fn show(&mut self, text: impl Into<String>, kind: StatusKind) -> u64 {
        self.seq += 1;
        self.current = Some(StatusMessage {
            text: text.into(),
            kind,
        });
        self.seq
    }

    /// Hide the region, but only if `ticket` still identifies the
    /// visible message.
    pub fn clear_if(&mut self, ticket: u64) {
        if self.seq == ticket {
            self.current = None;
        }
    }
}

/// Show an outcome message and schedule its auto-hide after
/// [`STATUS_VISIBLE_MS`].
#[cfg(feature = "csr")]
pub fn show_transient(
    status: leptos::prelude::RwSignal<StatusState>,
    text: String,
    kind: StatusKind,
) {
    use leptos::prelude::Update;

    let mut ticket = 0;
    status.update(|state| ticket = state.show(text, kind));
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            STATUS_VISIBLE_MS,
        )))
        .await;
        status.update(|state| state.clear_if(ticket));
    });
}
