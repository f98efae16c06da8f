//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is app-wide and provided via context; `dashboard` is owned by
//! the admin dashboard page.

pub mod dashboard;
pub mod session;
