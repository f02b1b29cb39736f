//! Failure taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every variant ends up as a transient notice. Only `Status` can carry a
//! server-authored message; the rest fall back to a caller-supplied phrase.

/// Error returned by `ActivityApi` calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// A 2xx response whose body could not be decoded.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// Called from a build without browser networking.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Server-provided `detail`, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text for an error notice: the server detail when present, else `fallback`.
    pub fn notice_text(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_owned()
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}
