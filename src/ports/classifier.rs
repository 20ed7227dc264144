//! Classifier port: the opaque prediction capability.

/// A pre-trained binary decision function.
///
/// Implementations are loaded once at startup, never mutated afterwards,
/// and safe to share across threads without locking. `predict` must be
/// deterministic for a fixed input within the lifetime of a loaded handle.
pub trait Classifier: Send + Sync {
    /// Number of features the model was trained on.
    fn expected_features(&self) -> usize;

    /// Classify an ordered feature vector.
    ///
    /// Returns the hard label: 1 for a positive finding, 0 otherwise. The
    /// caller is responsible for checking the vector length beforehand;
    /// implementations may still fail on internal numeric problems.
    ///
    /// # Errors
    /// Returns `InferenceError` if the underlying model computation fails.
    fn predict(&self, features: &[f64]) -> Result<u8, InferenceError>;
}

/// Failure raised by the opaque model during inference.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InferenceError {
    #[error("decision score is not finite")]
    NonFiniteScore,

    #[error("classifier failure: {0}")]
    Failed(String),
}
