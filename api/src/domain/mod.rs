//! Domain models
//!
//! Pure data models for the talent dataset and the raw client input to the
//! talent check. Separate from the derived response views in the
//! application layer.

pub mod talent;

pub use talent::{CalculationInputs, RawInput, Talent, TalentDataset, TalentFactors, TalentGroup};
