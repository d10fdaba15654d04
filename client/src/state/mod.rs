//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `sources`, `stats`, `ui`) and each model
//! is a plain struct held in an `RwSignal` provided via context. Transitions
//! live on the structs so they can be tested without a reactive runtime.

pub mod chat;
pub mod sources;
pub mod stats;
pub mod ui;
