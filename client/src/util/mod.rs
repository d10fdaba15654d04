//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate prompt text, upload filtering, and browser delivery
//! of exports from page and component logic.

pub mod delivery;
pub mod prompts;
pub mod upload;
