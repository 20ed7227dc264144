//! Application layer: Use cases and services.
//!
//! Orchestrates domain logic with the classifier port.

mod screening;

pub use screening::ScreeningService;
