//! Port for the external prediction service.

use thiserror::Error;

use crate::domain::{PredictionRequest, PredictionResult};

/// Uniform failure signal for a prediction request.
///
/// All failures are terminal to the current submission attempt and are
/// surfaced in the form's error slot; none are fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictorError {
    /// The service answered with a non-2xx status. The response body is
    /// not inspected for details.
    #[error("Failed to get prediction")]
    Status { code: u16 },

    /// The request never completed (connect, DNS, read failures).
    #[error("{message}")]
    Transport { message: String },

    /// The service answered 2xx but the body did not parse.
    #[error("Malformed prediction response: {message}")]
    Body { message: String },
}

/// External prediction service.
///
/// Implementations block until the service answers; the caller is
/// responsible for keeping at most one request in flight (the workflow's
/// busy flag) and for running the call off the UI thread.
pub trait Predictor {
    /// Submit one assessment snapshot and wait for the classification.
    ///
    /// # Errors
    /// Returns a [`PredictorError`] on transport failure, non-2xx status,
    /// or an unparseable response body. Never retries.
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictorError>;
}
