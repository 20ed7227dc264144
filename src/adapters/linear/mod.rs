//! Linear classifier adapter.
//!
//! Loads model artifacts exported by the training pipeline as JSON. The
//! artifact carries the fitted coefficients, intercept and (optionally) the
//! standardization parameters of a linear decision function. Everything
//! above the `Classifier` port treats the loaded model as a black box; only
//! this module knows the artifact layout.
//!
//! Artifacts are validated on load: parameter lengths must agree with the
//! feature name list, and every parameter must be finite. A malformed
//! artifact is rejected before the first prediction, not at inference time.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ports::{Classifier, InferenceError};

/// Largest feature count across the supported models (Parkinson's = 22).
const MAX_FEATURES: usize = 22;

/// Model parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedLinearModel {
    /// Informational tag written by the exporter, e.g. "diabetes".
    #[serde(default)]
    pub trained_for: Option<String>,

    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,

    /// Per-feature mean subtracted before scoring, when the model was
    /// trained on standardized inputs.
    #[serde(default)]
    pub scaler_mean: Option<Vec<f64>>,

    /// Per-feature scale divided out before scoring.
    #[serde(default)]
    pub scaler_scale: Option<Vec<f64>>,
}

/// Artifact loading or validation failure. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid artifact format: {0}")]
    Format(#[from] serde_json::Error),

    #[error("invalid model parameters: {0}")]
    Invalid(String),
}

/// Classifier backed by an exported linear model.
pub struct LinearClassifier {
    model: ExportedLinearModel,
}

impl LinearClassifier {
    /// Load and validate an artifact from disk.
    ///
    /// # Errors
    /// Returns `ModelError` if the file cannot be read, parsed, or fails
    /// the parameter sanity checks.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let model: ExportedLinearModel = serde_json::from_str(&content)?;
        let classifier = Self::from_model(model)?;

        tracing::info!(
            path = %path.display(),
            n_features = classifier.model.feature_names.len(),
            standardized = classifier.model.scaler_mean.is_some(),
            "Loaded model artifact"
        );

        Ok(classifier)
    }

    /// Validate already-deserialized model parameters.
    ///
    /// # Errors
    /// Returns `ModelError::Invalid` when parameter lengths disagree or any
    /// parameter is non-finite.
    pub fn from_model(model: ExportedLinearModel) -> Result<Self, ModelError> {
        let n = model.feature_names.len();
        if n == 0 || n > MAX_FEATURES {
            return Err(ModelError::Invalid(format!(
                "feature count {n} outside [1, {MAX_FEATURES}]"
            )));
        }
        if model.coefficients.len() != n {
            return Err(ModelError::Invalid(format!(
                "coefficients length {} does not match {n} feature names",
                model.coefficients.len()
            )));
        }
        for opt in [&model.scaler_mean, &model.scaler_scale] {
            if let Some(v) = opt {
                if v.len() != n {
                    return Err(ModelError::Invalid(format!(
                        "scaler parameter length {} does not match {n} feature names",
                        v.len()
                    )));
                }
            }
        }
        if model.scaler_mean.is_some() != model.scaler_scale.is_some() {
            return Err(ModelError::Invalid(
                "scaler_mean and scaler_scale must be given together".to_string(),
            ));
        }
        if let Some(scale) = &model.scaler_scale {
            if scale.iter().any(|s| *s == 0.0) {
                return Err(ModelError::Invalid("scaler_scale contains zero".to_string()));
            }
        }

        let finite = model.coefficients.iter().all(|c| c.is_finite())
            && model.intercept.is_finite()
            && model
                .scaler_mean
                .iter()
                .chain(model.scaler_scale.iter())
                .flat_map(|v| v.iter())
                .all(|x| x.is_finite());
        if !finite {
            return Err(ModelError::Invalid(
                "model parameters contain non-finite values".to_string(),
            ));
        }

        Ok(Self { model })
    }

    fn decision(&self, features: &[f64]) -> f64 {
        let mut score = self.model.intercept;
        match (&self.model.scaler_mean, &self.model.scaler_scale) {
            (Some(mean), Some(scale)) => {
                for i in 0..features.len() {
                    score += self.model.coefficients[i] * (features[i] - mean[i]) / scale[i];
                }
            }
            _ => {
                for (c, x) in self.model.coefficients.iter().zip(features) {
                    score += c * x;
                }
            }
        }
        score
    }
}

impl Classifier for LinearClassifier {
    fn expected_features(&self) -> usize {
        self.model.coefficients.len()
    }

    fn predict(&self, features: &[f64]) -> Result<u8, InferenceError> {
        if features.len() != self.expected_features() {
            return Err(InferenceError::Failed(format!(
                "model expects {} features, got {}",
                self.expected_features(),
                features.len()
            )));
        }

        let score = self.decision(features);
        if !score.is_finite() {
            return Err(InferenceError::NonFiniteScore);
        }

        Ok(u8::from(score > 0.0))
    }
}
