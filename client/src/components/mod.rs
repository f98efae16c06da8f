//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and forms while reading/writing shared
//! state from Leptos context providers or signals passed in by pages.

pub mod add_user_dialog;
pub mod footer;
pub mod form_field;
pub mod navbar;
