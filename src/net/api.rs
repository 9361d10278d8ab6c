//! REST helpers for the legacy backend's JSON endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Transport`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call distinguishes transport failures (request failed, body
//! not parseable) from application-level rejections (`success: false`
//! envelope). Callers surface the server-supplied message for
//! rejections when present and fall back to a generic message
//! otherwise. No call retries automatically.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiResponse, ContentDetail, ContentRecord};

/// Why a backend call produced no payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Network failure or an unparseable response body.
    Transport,
    /// The envelope parsed but carried `success: false` (or no payload);
    /// holds the server-supplied message when one was present.
    Rejected(Option<String>),
}

impl ApiError {
    /// Message to show the user, preferring the server's own wording.
    pub fn message(&self, fallback: &str) -> String {
        match self {
            ApiError::Transport => fallback.to_owned(),
            ApiError::Rejected(msg) => msg.clone().unwrap_or_else(|| fallback.to_owned()),
        }
    }
}

/// Owner content listing endpoint.
pub const MY_CONTENT_ENDPOINT: &str = "/guide/my_content";

#[cfg(any(test, feature = "hydrate"))]
fn edit_content_endpoint(id: i64) -> String {
    format!("/guide/edit_content/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_content_endpoint(id: i64) -> String {
    format!("/guide/delete_content/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn content_detail_endpoint(id: i64) -> String {
    format!("/content/{id}")
}

/// Extract the payload from a parsed envelope, treating a false/missing
/// success flag or an absent payload as an application-level rejection.
pub fn unwrap_envelope<T>(resp: ApiResponse<T>) -> Result<T, ApiError> {
    if resp.success {
        resp.content.ok_or(ApiError::Rejected(resp.message))
    } else {
        Err(ApiError::Rejected(resp.message))
    }
}

/// Extract a bare acknowledgement from a mutation envelope.
pub fn unwrap_ack<T>(resp: ApiResponse<T>) -> Result<(), ApiError> {
    if resp.success {
        Ok(())
    } else {
        Err(ApiError::Rejected(resp.message))
    }
}

#[cfg(feature = "hydrate")]
async fn get_envelope<T: serde::de::DeserializeOwned + Default>(url: &str) -> Result<ApiResponse<T>, ApiError> {
    let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| {
        log::error!("request to {url} failed: {e}");
        ApiError::Transport
    })?;
    resp.json::<ApiResponse<T>>().await.map_err(|e| {
        log::error!("response from {url} not parseable: {e}");
        ApiError::Transport
    })
}

/// Fetch the signed-in guide's own content rows, in server order.
///
/// # Errors
///
/// [`ApiError::Transport`] on network/parse failure, or
/// [`ApiError::Rejected`] when the backend reports failure.
pub async fn fetch_my_content() -> Result<Vec<ContentRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        unwrap_envelope(get_envelope(MY_CONTENT_ENDPOINT).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport)
    }
}

/// Fetch a single owned content row for the edit form.
///
/// # Errors
///
/// Same taxonomy as [`fetch_my_content`].
pub async fn fetch_content_for_edit(id: i64) -> Result<ContentRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        unwrap_envelope(get_envelope(&edit_content_endpoint(id)).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Transport)
    }
}

/// Fetch the public detail projection of a content row.
///
/// # Errors
///
/// Same taxonomy as [`fetch_my_content`].
pub async fn fetch_content_detail(id: i64) -> Result<ContentDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        unwrap_envelope(get_envelope(&content_detail_endpoint(id)).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Transport)
    }
}

/// Submit the edit form as multipart form data.
///
/// The `FormData` is built from the live form element so the optional
/// image file rides along untouched.
///
/// # Errors
///
/// Same taxonomy as [`fetch_my_content`]; a malformed acknowledgement
/// body counts as a rejection.
#[cfg(feature = "hydrate")]
pub async fn update_content(id: i64, form: web_sys::FormData) -> Result<(), ApiError> {
    let url = edit_content_endpoint(id);
    // The backend only answers with JSON when the client asks for it;
    // otherwise it falls back to its flash-and-redirect form flow.
    let request = gloo_net::http::Request::post(&url)
        .header("Accept", "application/json")
        .body(form)
        .map_err(|e| {
            log::error!("building update request for {url} failed: {e}");
            ApiError::Transport
        })?;
    let resp = request.send().await.map_err(|e| {
        log::error!("request to {url} failed: {e}");
        ApiError::Transport
    })?;
    let body = resp.json::<ApiResponse<serde_json::Value>>().await.map_err(|e| {
        log::error!("response from {url} not parseable: {e}");
        ApiError::Transport
    })?;
    unwrap_ack(body)
}

/// Delete an owned content row.
///
/// # Errors
///
/// Same taxonomy as [`fetch_my_content`].
pub async fn delete_content(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = delete_content_endpoint(id);
        let resp = gloo_net::http::Request::delete(&url).send().await.map_err(|e| {
            log::error!("request to {url} failed: {e}");
            ApiError::Transport
        })?;
        let body = resp.json::<ApiResponse<serde_json::Value>>().await.map_err(|e| {
            log::error!("response from {url} not parseable: {e}");
            ApiError::Transport
        })?;
        unwrap_ack(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Transport)
    }
}
