//! Screening service: routes feature vectors to the right classifier.
//!
//! Holds the three classifier handles loaded at startup. Handles are
//! read-only after construction and shared immutably across threads, so
//! the service needs no locking.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::linear::{LinearClassifier, ModelError};
use crate::domain::{DiseaseId, FeatureSpec, FeatureVector, Verdict};
use crate::ports::Classifier;
use crate::MedscreenError;

/// Process-wide prediction context: one classifier handle per disease.
pub struct ScreeningService<C: Classifier> {
    diabetes: Arc<C>,
    heart: Arc<C>,
    parkinsons: Arc<C>,
}

impl<C: Classifier> ScreeningService<C> {
    /// Build the service from pre-loaded handles.
    ///
    /// Each handle's feature count must match the feature spec of its
    /// disease; a mismatch means the wrong artifact was supplied and is
    /// treated as a fatal load error.
    ///
    /// # Errors
    /// Returns `MedscreenError::ModelLoad` describing the mismatched handle.
    pub fn new(diabetes: Arc<C>, heart: Arc<C>, parkinsons: Arc<C>) -> Result<Self, MedscreenError> {
        let service = Self {
            diabetes,
            heart,
            parkinsons,
        };

        for disease in DiseaseId::ALL {
            let expected = FeatureSpec::of(disease).len();
            let actual = service.handle(disease).expected_features();
            if actual != expected {
                return Err(MedscreenError::ModelLoad(ModelError::Invalid(format!(
                    "{disease} model expects {actual} features, spec defines {expected}"
                ))));
            }
        }

        Ok(service)
    }

    fn handle(&self, disease: DiseaseId) -> &C {
        match disease {
            DiseaseId::Diabetes => &self.diabetes,
            DiseaseId::Heart => &self.heart,
            DiseaseId::Parkinsons => &self.parkinsons,
        }
    }

    /// Run one prediction.
    ///
    /// Exactly one classifier call per invocation, no retry. Deterministic
    /// for a fixed `(disease, vector)` within the process lifetime.
    ///
    /// # Errors
    /// `ShapeMismatch` when the vector length differs from the disease's
    /// field count; `Inference` when the underlying classifier fails.
    pub fn predict(
        &self,
        disease: DiseaseId,
        vector: &FeatureVector,
    ) -> Result<Verdict, MedscreenError> {
        let expected = FeatureSpec::of(disease).len();
        if vector.len() != expected {
            tracing::warn!(
                %disease,
                expected,
                got = vector.len(),
                "Rejecting wrongly sized feature vector"
            );
            return Err(MedscreenError::ShapeMismatch {
                expected,
                got: vector.len(),
            });
        }

        let label = self
            .handle(disease)
            .predict(vector.as_slice())
            .map_err(|e| MedscreenError::Inference(e.to_string()))?;

        // Feature values are clinical data; log only the outcome.
        let verdict = Verdict::new(disease, label);
        tracing::info!(%disease, label, positive = verdict.is_positive(), "Prediction complete");

        Ok(verdict)
    }
}

impl ScreeningService<LinearClassifier> {
    /// Load all three model artifacts from a directory.
    ///
    /// Any missing or malformed artifact is fatal: the service is not
    /// constructed and startup must halt.
    ///
    /// # Errors
    /// Returns the first artifact load failure.
    pub fn load_from_dir(dir: &Path) -> Result<Self, MedscreenError> {
        tracing::info!(dir = %dir.display(), "Loading model artifacts");

        let mut handles = Vec::with_capacity(3);
        for disease in DiseaseId::ALL {
            let path = dir.join(disease.artifact_name());
            let classifier = LinearClassifier::load(&path)?;
            handles.push(Arc::new(classifier));
        }

        let mut iter = handles.into_iter();
        // DiseaseId::ALL order: diabetes, heart, parkinsons
        let (diabetes, heart, parkinsons) = match (iter.next(), iter.next(), iter.next()) {
            (Some(d), Some(h), Some(p)) => (d, h, p),
            _ => unreachable!("three diseases loaded above"),
        };

        Self::new(diabetes, heart, parkinsons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::InferenceError;

    /// Test double: positive when the second feature crosses a threshold,
    /// mirroring a glucose-style decision boundary.
    struct ThresholdClassifier {
        n: usize,
        index: usize,
        threshold: f64,
    }

    impl Classifier for ThresholdClassifier {
        fn expected_features(&self) -> usize {
            self.n
        }

        fn predict(&self, features: &[f64]) -> Result<u8, InferenceError> {
            Ok(u8::from(features[self.index] >= self.threshold))
        }
    }

    struct FailingClassifier(usize);

    impl Classifier for FailingClassifier {
        fn expected_features(&self) -> usize {
            self.0
        }

        fn predict(&self, _features: &[f64]) -> Result<u8, InferenceError> {
            Err(InferenceError::NonFiniteScore)
        }
    }

    fn test_service() -> ScreeningService<ThresholdClassifier> {
        ScreeningService::new(
            Arc::new(ThresholdClassifier {
                n: 8,
                index: 1,
                threshold: 150.0,
            }),
            Arc::new(ThresholdClassifier {
                n: 13,
                index: 1,
                threshold: 1.0, // Sex = 1 flags positive in the fixture
            }),
            Arc::new(ThresholdClassifier {
                n: 22,
                index: 0,
                threshold: 200.0,
            }),
        )
        .expect("handles match specs")
    }

    #[test]
    fn test_rejects_handle_with_wrong_feature_count() {
        let result = ScreeningService::new(
            Arc::new(ThresholdClassifier {
                n: 7, // diabetes spec defines 8
                index: 0,
                threshold: 0.0,
            }),
            Arc::new(ThresholdClassifier {
                n: 13,
                index: 0,
                threshold: 0.0,
            }),
            Arc::new(ThresholdClassifier {
                n: 22,
                index: 0,
                threshold: 0.0,
            }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_diabetes_negative_scenario() {
        let service = test_service();
        let vector = FeatureVector::from_raw(vec![2.0, 120.0, 70.0, 20.0, 79.0, 25.0, 0.5, 33.0]);

        let verdict = service.predict(DiseaseId::Diabetes, &vector).unwrap();
        assert_eq!(verdict.label, 0);
        assert_eq!(verdict.message, "The person is not diabetic");
    }

    #[test]
    fn test_diabetes_positive_scenario() {
        let service = test_service();
        let vector = FeatureVector::from_raw(vec![6.0, 180.0, 90.0, 40.0, 200.0, 35.0, 1.5, 55.0]);

        let verdict = service.predict(DiseaseId::Diabetes, &vector).unwrap();
        assert_eq!(verdict.label, 1);
        assert_eq!(verdict.message, "The person is diabetic");
    }

    #[test]
    fn test_heart_positive_scenario() {
        let service = test_service();
        // Sex=1 (index 1), FastingBS=0 (index 5)
        let vector = FeatureVector::from_raw(vec![
            54.0, 1.0, 0.0, 130.0, 240.0, 0.0, 1.0, 150.0, 0.0, 1.0, 1.0, 0.0, 2.0,
        ]);

        let verdict = service.predict(DiseaseId::Heart, &vector).unwrap();
        assert_eq!(verdict.label, 1);
        assert_eq!(verdict.message, "The person is having heart disease");
    }

    #[test]
    fn test_predict_is_deterministic() {
        let service = test_service();
        let vector = FeatureVector::from_raw(vec![6.0, 180.0, 90.0, 40.0, 200.0, 35.0, 1.5, 55.0]);

        let a = service.predict(DiseaseId::Diabetes, &vector).unwrap();
        let b = service.predict(DiseaseId::Diabetes, &vector).unwrap();
        assert_eq!(a.label, b.label);
        assert_eq!(a.message, b.message);
    }

    #[test]
    fn test_shape_mismatch() {
        let service = test_service();
        let short = FeatureVector::from_raw(vec![1.0; 7]);

        match service.predict(DiseaseId::Diabetes, &short) {
            Err(MedscreenError::ShapeMismatch { expected, got }) => {
                assert_eq!(expected, 8);
                assert_eq!(got, 7);
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_inference_failure_is_surfaced() {
        let service = ScreeningService::new(
            Arc::new(FailingClassifier(8)),
            Arc::new(FailingClassifier(13)),
            Arc::new(FailingClassifier(22)),
        )
        .unwrap();

        let vector = FeatureVector::from_raw(vec![0.0; 8]);
        assert!(matches!(
            service.predict(DiseaseId::Diabetes, &vector),
            Err(MedscreenError::Inference(_))
        ));
    }

    #[test]
    fn test_load_from_dir_missing_artifact_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // Directory exists but holds no artifacts: startup must fail.
        assert!(ScreeningService::load_from_dir(dir.path()).is_err());
    }

    // End-to-end checks against the shipped artifacts in models/.

    fn shipped_service() -> ScreeningService<crate::adapters::linear::LinearClassifier> {
        ScreeningService::load_from_dir(Path::new("models")).expect("shipped models should load")
    }

    #[test]
    fn test_shipped_diabetes_model_scenarios() {
        let service = shipped_service();

        let low = FeatureVector::from_raw(vec![2.0, 120.0, 70.0, 20.0, 79.0, 25.0, 0.5, 33.0]);
        let verdict = service.predict(DiseaseId::Diabetes, &low).unwrap();
        assert_eq!(verdict.message, "The person is not diabetic");

        let high = FeatureVector::from_raw(vec![6.0, 180.0, 90.0, 40.0, 200.0, 35.0, 1.5, 55.0]);
        let verdict = service.predict(DiseaseId::Diabetes, &high).unwrap();
        assert_eq!(verdict.message, "The person is diabetic");
    }

    #[test]
    fn test_shipped_heart_model_positive_case() {
        let service = shipped_service();

        // Sex=1, FastingBS=0
        let vector = FeatureVector::from_raw(vec![
            54.0, 1.0, 0.0, 130.0, 240.0, 0.0, 1.0, 150.0, 0.0, 1.0, 1.0, 0.0, 2.0,
        ]);
        let verdict = service.predict(DiseaseId::Heart, &vector).unwrap();
        assert_eq!(verdict.label, 1);
        assert_eq!(verdict.message, "The person is having heart disease");
    }

    #[test]
    fn test_shipped_models_match_specs() {
        let service = shipped_service();
        for disease in DiseaseId::ALL {
            assert_eq!(
                service.handle(disease).expected_features(),
                FeatureSpec::of(disease).len()
            );
        }
    }
}
