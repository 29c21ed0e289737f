//! Background prediction worker.
//!
//! Runs the blocking HTTP request off the UI thread so the event loop
//! stays responsive. The workflow's busy flag guarantees at most one
//! worker is ever pending; a spawned request always runs to completion
//! or failure and is never cancelled.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::domain::{PredictionRequest, PredictionResult};
use crate::ports::Predictor;

/// Terminal event from the prediction worker.
#[derive(Debug, Clone)]
pub enum PredictionEvent {
    /// The service answered with a classification.
    Complete(PredictionResult),
    /// Transport failure, non-2xx status, or malformed body.
    Failed(String),
}

/// Handle to a running prediction worker.
pub struct PredictionWorkerHandle {
    event_rx: Receiver<PredictionEvent>,
    _handle: JoinHandle<()>,
}

impl PredictionWorkerHandle {
    /// Try to receive the outcome (non-blocking).
    #[must_use]
    pub fn try_recv(&self) -> Option<PredictionEvent> {
        self.event_rx.try_recv().ok()
    }
}

/// Spawns prediction requests on a background thread.
pub struct PredictionWorker;

impl PredictionWorker {
    /// Issue one request against the captured snapshot.
    ///
    /// Returns a handle to poll for the outcome.
    pub fn spawn<P>(predictor: Arc<P>, request: PredictionRequest) -> PredictionWorkerHandle
    where
        P: Predictor + Send + Sync + 'static,
    {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let event = match predictor.predict(&request) {
                Ok(result) => PredictionEvent::Complete(result),
                Err(e) => PredictionEvent::Failed(e.to_string()),
            };
            // The receiver may be gone if the app quit mid-request.
            let _ = tx.send(event);
        });

        PredictionWorkerHandle {
            event_rx: rx,
            _handle: handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, ProbabilitySplit, SmokingHistory, YesNo};
    use crate::ports::PredictorError;
    use std::time::Duration;

    struct SlowStub;

    impl Predictor for SlowStub {
        fn predict(
            &self,
            _request: &PredictionRequest,
        ) -> Result<PredictionResult, PredictorError> {
            thread::sleep(Duration::from_millis(20));
            Ok(PredictionResult {
                prediction: 0,
                probability: ProbabilitySplit {
                    no_diabetes: 0.9,
                    diabetes: 0.1,
                },
                risk_level: "Low".to_string(),
            })
        }
    }

    fn request() -> PredictionRequest {
        PredictionRequest {
            gender: Gender::Male,
            age: 40,
            hypertension: YesNo::No,
            heart_disease: YesNo::No,
            smoking_history: SmokingHistory::Never,
            bmi: 24.0,
            hba1c_level: 5.0,
            blood_glucose_level: 95,
        }
    }

    #[test]
    fn test_worker_delivers_outcome() {
        let handle = PredictionWorker::spawn(Arc::new(SlowStub), request());

        // Poll until the worker resolves, as the event loop does.
        let mut outcome = None;
        for _ in 0..100 {
            if let Some(event) = handle.try_recv() {
                outcome = Some(event);
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }

        match outcome {
            Some(PredictionEvent::Complete(result)) => assert_eq!(result.risk_level, "Low"),
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn test_worker_surfaces_failures_as_messages() {
        struct FailingStub;
        impl Predictor for FailingStub {
            fn predict(
                &self,
                _request: &PredictionRequest,
            ) -> Result<PredictionResult, PredictorError> {
                Err(PredictorError::Status { code: 500 })
            }
        }

        let handle = PredictionWorker::spawn(Arc::new(FailingStub), request());
        let mut outcome = None;
        for _ in 0..100 {
            if let Some(event) = handle.try_recv() {
                outcome = Some(event);
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }

        match outcome {
            Some(PredictionEvent::Failed(message)) => {
                assert_eq!(message, "Failed to get prediction");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
