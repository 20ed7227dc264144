//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external dependencies.
//! Feature specs are static per disease; vectors are validated at collection
//! time and never mutated afterwards.

mod disease;
mod features;
mod verdict;

pub use disease::DiseaseId;
pub use features::{FeatureSpec, FeatureVector, FieldKind, FieldSpec, ValidationError};
pub use verdict::Verdict;
