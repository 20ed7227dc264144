//! # medscreen
//!
//! Multi-disease screening terminal application.
//!
//! Collects clinical measurements for one of three diseases (diabetes, heart
//! disease, Parkinson's disease), feeds them to a pre-trained binary
//! classifier loaded once at startup, and displays a positive or negative
//! verdict.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (DiseaseId, FeatureSpec, FeatureVector, Verdict)
//! - `ports`: Trait definitions for external operations (Classifier)
//! - `adapters`: Concrete implementations (exported linear model artifacts)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{DiseaseId, FeatureSpec, FeatureVector, Verdict};

/// Result type for medscreen operations
pub type Result<T> = std::result::Result<T, MedscreenError>;

/// Main error type for medscreen.
///
/// `ModelLoad` is fatal at startup; everything else is caught at the action
/// boundary and surfaced to the user as a message.
#[derive(Debug, thiserror::Error)]
pub enum MedscreenError {
    #[error("Failed to load model artifact: {0}")]
    ModelLoad(#[from] adapters::linear::ModelError),

    #[error("Invalid input: {0}")]
    Validation(#[from] domain::ValidationError),

    #[error("Feature vector has {got} values, expected {expected}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
