//! HTTP adapter for the prediction service.
//!
//! Speaks the service's wire format: `POST {base}/predict` with a JSON
//! body, JSON classification back on 2xx. Deliberately minimal request
//! lifecycle: no retry, no timeout, no cancellation.

use reqwest::blocking::Client;

use crate::domain::{PredictionRequest, PredictionResult};
use crate::ports::{Predictor, PredictorError};

/// Blocking HTTP client for the prediction endpoint.
pub struct HttpPredictor {
    client: Client,
    endpoint: String,
}

impl HttpPredictor {
    /// Create a client for the given base URL (e.g. `http://127.0.0.1:8000`).
    ///
    /// # Errors
    /// Returns an error if the underlying TLS backend fails to initialize.
    pub fn new(base_url: impl Into<String>) -> Result<Self, PredictorError> {
        let base = base_url.into();
        let endpoint = format!("{}/predict", base.trim_end_matches('/'));
        let client = Client::builder()
            .build()
            .map_err(|e| PredictorError::Transport {
                message: e.to_string(),
            })?;

        Ok(Self { client, endpoint })
    }

    /// The resolved prediction endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Predictor for HttpPredictor {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictorError> {
        tracing::debug!("Submitting assessment to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| PredictorError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Prediction service answered {}", status);
            return Err(PredictorError::Status {
                code: status.as_u16(),
            });
        }

        let result: PredictionResult =
            response.json().map_err(|e| PredictorError::Body {
                message: e.to_string(),
            })?;

        tracing::info!(
            "Prediction received: class={}, risk_level={}",
            result.prediction,
            result.risk_level
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let predictor = HttpPredictor::new("http://localhost:8000").expect("client builds");
        assert_eq!(predictor.endpoint(), "http://localhost:8000/predict");

        let predictor = HttpPredictor::new("http://localhost:8000/").expect("client builds");
        assert_eq!(predictor.endpoint(), "http://localhost:8000/predict");
    }

    #[test]
    fn test_status_error_displays_generic_message() {
        let err = PredictorError::Status { code: 500 };
        assert_eq!(err.to_string(), "Failed to get prediction");
    }

    #[test]
    fn test_transport_error_displays_underlying_message() {
        let err = PredictorError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "connection refused");
    }
}
