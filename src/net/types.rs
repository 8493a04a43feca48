#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

/// The full activity collection as returned by `GET /activities`:
/// a JSON object mapping activity name to activity data. The backend
/// sends the whole collection on every fetch; there is no delta protocol.
pub type ActivityMap = BTreeMap<String, Activity>;

/// A schedulable offering with a participant capacity and roster.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus current roster size, computed for display only.
    /// Saturates at zero if the backend ever over-fills an activity.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Success body for signup and unregister: `{"message": "..."}`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Error body for non-2xx responses: `{"detail": "..."}`.
/// The `detail` field is optional; a missing detail falls back to a
/// generic message at display time.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
