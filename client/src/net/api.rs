//! REST API helpers for the retrieval backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>`. The string is what the chat shows
//! in its error bubble: the backend's `detail` field when the response carries
//! one, otherwise a generic message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{KbStats, RagResult};
#[cfg(feature = "csr")]
use super::types::{RagForm, UploadResponse};

/// Backend used when `NOTEBOOK_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[cfg(any(test, feature = "csr"))]
const REQUEST_FAILED: &str = "Failed to process request";

#[cfg(not(feature = "csr"))]
const NOT_AVAILABLE: &str = "not available outside the browser";

/// Backend base URL, fixed at compile time.
pub fn api_base_url() -> &'static str {
    option_env!("NOTEBOOK_API_URL").unwrap_or(DEFAULT_API_URL)
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Error text for a non-success response body.
#[cfg(any(test, feature = "csr"))]
fn error_detail(body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned());
    match detail {
        Some(Value::String(text)) if !text.is_empty() => text,
        Some(Value::Null | Value::String(_)) | None => REQUEST_FAILED.to_owned(),
        Some(other) => other.to_string(),
    }
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        log::warn!("backend returned {}: {body}", resp.status());
        return Err(error_detail(&body));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "csr")]
fn build_form(form: &RagForm, files: &[web_sys::File]) -> Result<web_sys::FormData, String> {
    let data = web_sys::FormData::new().map_err(|_| "could not build form data".to_owned())?;
    for file in files {
        data.append_with_blob("files", file)
            .map_err(|_| format!("could not attach {}", file.name()))?;
    }
    for (name, value) in form.text_fields() {
        data.append_with_str(name, &value)
            .map_err(|_| format!("could not set form field {name}"))?;
    }
    Ok(data)
}

/// `POST /api/rag` with a multipart body.
#[cfg(feature = "csr")]
async fn post_rag<T: serde::de::DeserializeOwned>(form: &RagForm, files: &[web_sys::File]) -> Result<T, String> {
    let data = build_form(form, files)?;
    let resp = gloo_net::http::Request::post(&endpoint(api_base_url(), "/api/rag"))
        .body(data)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

/// Ask a question about the documents already in the knowledge base.
///
/// # Errors
///
/// Returns the backend's error detail, or a transport error message.
pub async fn ask_question(question: &str) -> Result<RagResult, String> {
    #[cfg(feature = "csr")]
    {
        post_rag(&RagForm::ask(question), &[]).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = question;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Upload `files` and ask `question` about them in one request.
///
/// # Errors
///
/// Returns the backend's error detail, or a transport error message.
#[cfg(feature = "csr")]
pub async fn upload_and_ask(files: &[web_sys::File], question: &str, use_ocr: bool) -> Result<RagResult, String> {
    post_rag(&RagForm::upload_and_ask(question, use_ocr), files).await
}

/// Upload `files` into the knowledge base without asking anything.
///
/// # Errors
///
/// Returns the backend's error detail, or a transport error message.
#[cfg(feature = "csr")]
pub async fn upload_documents(files: &[web_sys::File], use_ocr: bool, clear_kb: bool) -> Result<UploadResponse, String> {
    post_rag(&RagForm::upload(use_ocr, clear_kb), files).await
}

/// Liveness probe via `GET /api/health`.
///
/// # Errors
///
/// Returns an error string if the backend is unreachable or unhealthy.
pub async fn health_check() -> Result<KbStats, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(api_base_url(), "/api/health"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Knowledge-base statistics via `GET /api/stats`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn get_stats() -> Result<KbStats, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(api_base_url(), "/api/stats"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Drop every document from the knowledge base via `DELETE /api/clear`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn clear_knowledge_base() -> Result<Value, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&endpoint(api_base_url(), "/api/clear"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(NOT_AVAILABLE.to_owned())
    }
}
