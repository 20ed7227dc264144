//! Background prediction worker.
//!
//! Runs the classifier call off the draw loop so the UI stays responsive,
//! reporting the outcome over an mpsc channel. One worker per submit
//! action; no retry on failure.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::application::ScreeningService;
use crate::domain::{DiseaseId, FeatureVector, Verdict};
use crate::ports::Classifier;

/// Progress updates from the prediction worker.
#[derive(Debug, Clone)]
pub enum PredictionProgress {
    /// Classifier call in flight
    Scoring,
    /// Prediction finished
    Complete(Verdict),
    /// Prediction failed; message is user-displayable
    Error(String),
}

/// Handle to a running prediction worker.
pub struct PredictionWorkerHandle {
    progress_rx: Receiver<PredictionProgress>,
    _handle: JoinHandle<()>,
}

impl PredictionWorkerHandle {
    /// Try to receive the next progress update (non-blocking).
    #[must_use]
    pub fn try_recv(&self) -> Option<PredictionProgress> {
        self.progress_rx.try_recv().ok()
    }
}

pub struct PredictionWorker;

impl PredictionWorker {
    /// Spawn a background prediction task.
    pub fn spawn<C>(
        service: Arc<ScreeningService<C>>,
        disease: DiseaseId,
        vector: FeatureVector,
    ) -> PredictionWorkerHandle
    where
        C: Classifier + 'static,
    {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            Self::run(service, disease, vector, &tx);
        });

        PredictionWorkerHandle {
            progress_rx: rx,
            _handle: handle,
        }
    }

    fn run<C>(
        service: Arc<ScreeningService<C>>,
        disease: DiseaseId,
        vector: FeatureVector,
        tx: &Sender<PredictionProgress>,
    ) where
        C: Classifier + 'static,
    {
        let _ = tx.send(PredictionProgress::Scoring);

        match service.predict(disease, &vector) {
            Ok(verdict) => {
                let _ = tx.send(PredictionProgress::Complete(verdict));
            }
            Err(e) => {
                tracing::error!(%disease, error = %e, "Prediction failed");
                let _ = tx.send(PredictionProgress::Error(e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::InferenceError;
    use std::time::Duration;

    struct AlwaysPositive(usize);

    impl Classifier for AlwaysPositive {
        fn expected_features(&self) -> usize {
            self.0
        }

        fn predict(&self, _features: &[f64]) -> Result<u8, InferenceError> {
            Ok(1)
        }
    }

    #[test]
    fn test_worker_delivers_verdict() {
        let service = Arc::new(
            ScreeningService::new(
                Arc::new(AlwaysPositive(8)),
                Arc::new(AlwaysPositive(13)),
                Arc::new(AlwaysPositive(22)),
            )
            .unwrap(),
        );

        let vector = FeatureVector::from_raw(vec![0.0; 8]);
        let handle = PredictionWorker::spawn(service, DiseaseId::Diabetes, vector);

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        let mut verdict = None;
        while std::time::Instant::now() < deadline {
            match handle.try_recv() {
                Some(PredictionProgress::Complete(v)) => {
                    verdict = Some(v);
                    break;
                }
                Some(PredictionProgress::Error(e)) => panic!("unexpected error: {e}"),
                _ => thread::sleep(Duration::from_millis(5)),
            }
        }

        let verdict = verdict.expect("worker should complete");
        assert!(verdict.is_positive());
    }

    #[test]
    fn test_worker_reports_shape_mismatch_as_error() {
        let service = Arc::new(
            ScreeningService::new(
                Arc::new(AlwaysPositive(8)),
                Arc::new(AlwaysPositive(13)),
                Arc::new(AlwaysPositive(22)),
            )
            .unwrap(),
        );

        let short = FeatureVector::from_raw(vec![0.0; 3]);
        let handle = PredictionWorker::spawn(service, DiseaseId::Diabetes, short);

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        loop {
            assert!(std::time::Instant::now() < deadline, "worker timed out");
            match handle.try_recv() {
                Some(PredictionProgress::Error(_)) => break,
                Some(PredictionProgress::Complete(_)) => panic!("expected error"),
                _ => thread::sleep(Duration::from_millis(5)),
            }
        }
    }
}
