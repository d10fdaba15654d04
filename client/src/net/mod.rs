//! Networking modules for the retrieval backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the response shapes and
//! the multipart form layout shared by every `/api/rag` call.

pub mod api;
pub mod types;
