//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the notebook's three panels and their dialogs while
//! reading/writing shared state from Leptos context providers.

pub mod chat_panel;
pub mod export_dialog;
pub mod markdown_view;
pub mod message_bubble;
pub mod notebook_header;
pub mod quick_actions;
pub mod sources_panel;
pub mod studio_panel;
