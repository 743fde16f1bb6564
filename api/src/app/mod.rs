//! Application layer
//!
//! Services and calculations sitting between the domain models and the HTTP
//! handlers.

pub mod check;
pub mod talent_service;

pub use check::{coerce_inputs, effective_value};
pub use talent_service::{LocalizedDataset, LocalizedGroup, LocalizedTalent, TalentService};
