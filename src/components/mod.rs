//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (cards, toasts) while reading/writing
//! shared state from Leptos context providers. Page-specific dialogs
//! live next to their page.

pub mod content_card;
pub mod toast_stack;
