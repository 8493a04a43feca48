//! URL builders for the activities API.
//!
//! Activity names travel as a path segment and emails as the `email`
//! query parameter; both are percent-encoded before transmission.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

/// `GET` endpoint for the full activity collection.
pub fn activities_url() -> String {
    "/activities".to_owned()
}

/// `POST` endpoint registering `email` for `activity`.
pub fn signup_url(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// `DELETE` endpoint removing `email` from `activity`.
pub fn unregister_url(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/unregister?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}
