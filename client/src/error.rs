//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is retried. Load failures become a full-page message, booking
//! failures become a blocking notification, and auth failures are logged and
//! treated as "signed out". `user_message` is the single place that turns an
//! error into text a customer sees.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not complete (offline, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Http { status: u16 },

    /// The backend rejected a booking and said why.
    #[error("rejected: {0}")]
    Validation(String),

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The session check failed; callers treat this as signed out.
    #[error("session check failed: {0}")]
    AuthUnavailable(String),
}

impl ApiError {
    /// Customer-facing text for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server. Check your connection and try again.".to_owned(),
            Self::Http { status } => format!("The server returned an error ({status})."),
            Self::Validation(reason) => reason.clone(),
            Self::Decode(_) => "The server sent a response we could not read.".to_owned(),
            Self::AuthUnavailable(_) => "Sign-in status is unavailable.".to_owned(),
        }
    }
}
