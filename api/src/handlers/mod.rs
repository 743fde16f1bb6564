//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod check;
pub mod talents;

pub use check::check_talent;
pub use talents::get_talents;
