//! REST API helpers for communicating with the activities backend.
//!
//! In the browser (`csr`): real HTTP calls via `gloo-net`.
//! Outside the browser: stubs returning a transport error, so the rest
//! of the crate compiles and tests natively.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is classified as either `Transport` (the request never
//! completed, or the body could not be parsed) or `Rejected` (the server
//! answered with a non-2xx status, optionally carrying a `detail`
//! message). Callers convert the error into a user-visible message with
//! [`ApiError::user_message`] and never panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ActivityMap;
#[cfg(feature = "csr")]
use super::types::{ErrorBody, MessageBody};
#[cfg(feature = "csr")]
use super::url;

/// Generic message shown when a rejection carries no `detail` field.
pub const GENERIC_ERROR: &str = "An error occurred";

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed, or its response body was unreadable.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Select the text shown in the status region for this failure:
    /// the backend-supplied detail if present, [`GENERIC_ERROR`] for a
    /// rejection without detail, and the per-action `transport_fallback`
    /// when the request never completed.
    pub fn user_message(&self, transport_fallback: &str) -> String {
        match self {
            Self::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Rejected { detail: None, .. } => GENERIC_ERROR.to_owned(),
            Self::Transport(_) => transport_fallback.to_owned(),
        }
    }
}

/// Fetch the full activity collection from `GET /activities`.
///
/// # Errors
///
/// Returns `Transport` if the request or the JSON decode fails, and
/// `Rejected` on a non-2xx status.
pub async fn fetch_activities() -> Result<ActivityMap, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&url::activities_url())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Rejected {
                status: resp.status(),
                detail: None,
            });
        }
        resp.json::<ActivityMap>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(not_in_browser())
    }
}

/// Register `email` for `activity` via `POST
/// /activities/{name}/signup?email={email}`.
///
/// On success returns the backend confirmation message.
///
/// # Errors
///
/// `Rejected` carries the backend `detail` when the signup is refused
/// (unknown activity, duplicate participant, full roster).
pub async fn signup(activity: &str, email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&url::signup_url(activity, email))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        message_from(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (activity, email);
        Err(not_in_browser())
    }
}

/// Remove `email` from `activity` via `DELETE
/// /activities/{name}/unregister?email={email}`.
///
/// Response handling is identical in shape to [`signup`].
///
/// # Errors
///
/// Same taxonomy as [`signup`].
pub async fn unregister(activity: &str, email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&url::unregister_url(activity, email))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        message_from(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (activity, email);
        Err(not_in_browser())
    }
}

/// Decode a mutation response: `{message}` on success, `{detail}` with a
/// non-2xx status on failure. A failure body that cannot be parsed still
/// yields `Rejected`, just without a detail.
#[cfg(feature = "csr")]
async fn message_from(resp: gloo_net::http::Response) -> Result<String, ApiError> {
    if resp.ok() {
        let body: MessageBody = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(body.message)
    } else {
        let status = resp.status();
        let detail = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        Err(ApiError::Rejected { status, detail })
    }
}

#[cfg(not(feature = "csr"))]
fn not_in_browser() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}
