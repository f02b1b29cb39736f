//! REST calls against the activities API.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Elsewhere: every call returns `ApiError::Unavailable`, which keeps the
//! crate buildable and testable off the browser.
//!
//! DESIGN
//! ======
//! `ActivityApi` is the seam `ActivityBoard` talks through, so board
//! orchestration can be driven by an in-memory fake in tests. Endpoint and
//! body helpers are plain functions so URL encoding and error extraction are
//! testable without a network.

#![allow(async_fn_in_trait)]
#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::error::ApiError;
use super::types::{ActivityCatalog, ErrorBody, SignupReceipt};

/// Characters left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Remote operations the activity board depends on.
pub trait ActivityApi {
    /// Fetch the full catalog via `GET /activities`.
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError>;

    /// Add `email` to an activity via `POST /activities/{key}/signup`.
    async fn signup(&self, activity_key: &str, email: &str) -> Result<SignupReceipt, ApiError>;

    /// Remove `email` from an activity via `DELETE /activities/{key}/unregister`.
    async fn unregister(&self, activity_key: &str, email: &str) -> Result<(), ApiError>;
}

/// Percent-encode a path segment or query value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn activities_endpoint(base: &str) -> String {
    format!("{base}/activities")
}

pub fn signup_endpoint(base: &str, activity_key: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        encode_component(activity_key),
        encode_component(email)
    )
}

pub fn unregister_endpoint(base: &str, activity_key: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/unregister?email={}",
        encode_component(activity_key),
        encode_component(email)
    )
}

/// Build the error for a non-2xx response from its raw body.
pub fn status_error(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message().map(str::to_owned));
    ApiError::Status { status, detail }
}

/// Decode a signup success body. A blank or malformed body yields an empty receipt.
pub fn parse_signup_receipt(body: &str) -> SignupReceipt {
    if body.trim().is_empty() {
        return SignupReceipt::default();
    }
    serde_json::from_str(body).unwrap_or_default()
}

/// Decode a catalog body.
///
/// # Errors
///
/// Returns `ApiError::Decode` if the body is not a JSON object of activities.
pub fn parse_catalog(body: &str) -> Result<ActivityCatalog, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `ActivityApi` backed by the browser fetch API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpActivityApi {
    base: String,
}

impl HttpActivityApi {
    /// `base` is prepended to every path; empty means same-origin.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

/// Read a response body, turning non-2xx statuses into `ApiError::Status`.
#[cfg(feature = "csr")]
async fn read_body(resp: gloo_net::http::Response) -> Result<String, ApiError> {
    let ok = resp.ok();
    let status = resp.status();
    let body = resp.text().await?;
    if ok { Ok(body) } else { Err(status_error(status, &body)) }
}

impl ActivityApi for HttpActivityApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = activities_endpoint(&self.base);
            log::debug!("GET {url}");
            let resp = gloo_net::http::Request::get(&url).send().await?;
            parse_catalog(&read_body(resp).await?)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &self.base;
            Err(ApiError::Unavailable)
        }
    }

    async fn signup(&self, activity_key: &str, email: &str) -> Result<SignupReceipt, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = signup_endpoint(&self.base, activity_key, email);
            log::debug!("POST {url}");
            let resp = gloo_net::http::Request::post(&url).send().await?;
            Ok(parse_signup_receipt(&read_body(resp).await?))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.base, activity_key, email);
            Err(ApiError::Unavailable)
        }
    }

    async fn unregister(&self, activity_key: &str, email: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = unregister_endpoint(&self.base, activity_key, email);
            log::debug!("DELETE {url}");
            let resp = gloo_net::http::Request::delete(&url).send().await?;
            read_body(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.base, activity_key, email);
            Err(ApiError::Unavailable)
        }
    }
}
