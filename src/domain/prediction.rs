//! Wire types for the prediction service and the completed assessment record.

use serde::{Deserialize, Serialize};

use super::assessment::{Gender, SmokingHistory, YesNo};
use super::risk::RiskTier;

/// Request body for `POST /predict`.
///
/// Field names on the wire are exact, including the mixed-case
/// `HbA1c_level`. Built only from a validated [`super::AssessmentInput`],
/// so all categorical fields are guaranteed set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub gender: Gender,
    pub age: i64,
    pub hypertension: YesNo,
    pub heart_disease: YesNo,
    pub smoking_history: SmokingHistory,
    pub bmi: f64,
    #[serde(rename = "HbA1c_level")]
    pub hba1c_level: f64,
    pub blood_glucose_level: i64,
}

/// Class probabilities as returned by the service.
///
/// The two values should sum to ~1.0 but the service may round; the UI
/// renders them independently and never normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilitySplit {
    pub no_diabetes: f64,
    pub diabetes: f64,
}

/// Successful response body from the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Raw classifier label (0 or 1), not directly displayed.
    pub prediction: i64,
    pub probability: ProbabilitySplit,
    /// Open-ended risk label; matched case-insensitively against the
    /// known tiers, unknown values degrade to a neutral presentation.
    pub risk_level: String,
}

/// A completed assessment: the raw service response plus derived
/// presentation data and a timestamp for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub result: PredictionResult,
    pub tier: RiskTier,
    pub assessed_at: chrono::DateTime<chrono::Utc>,
}

impl Assessment {
    /// Wrap a service response, deriving its risk tier.
    #[must_use]
    pub fn new(result: PredictionResult) -> Self {
        Self {
            tier: RiskTier::from_label(&result.risk_level),
            result,
            assessed_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssessmentInput;

    #[test]
    fn test_request_wire_field_names() {
        let input = AssessmentInput {
            gender: Some(Gender::Female),
            age: 45,
            hypertension: Some(YesNo::No),
            heart_disease: Some(YesNo::No),
            smoking_history: Some(SmokingHistory::Never),
            bmi: 22.0,
            hba1c_level: 5.2,
            blood_glucose_level: 90,
        };
        let request = input.to_request().expect("valid input");
        let value = serde_json::to_value(&request).expect("serializes");

        assert_eq!(value["gender"], "Female");
        assert_eq!(value["age"], 45);
        assert_eq!(value["hypertension"], "No");
        assert_eq!(value["heart_disease"], "No");
        assert_eq!(value["smoking_history"], "never");
        assert_eq!(value["bmi"], 22.0);
        assert_eq!(value["HbA1c_level"], 5.2);
        assert_eq!(value["blood_glucose_level"], 90);
        // No stray keys beyond the eight the service expects.
        assert_eq!(value.as_object().expect("object").len(), 8);
    }

    #[test]
    fn test_smoking_history_wire_strings() {
        let strings: Vec<String> = SmokingHistory::ALL
            .iter()
            .map(|s| serde_json::to_value(s).expect("serializes").as_str().expect("string").to_string())
            .collect();
        assert_eq!(
            strings,
            ["never", "former", "current", "not current", "ever", "No Info"]
        );
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "prediction": 0,
            "probability": { "no_diabetes": 0.92, "diabetes": 0.08 },
            "risk_level": "Low"
        }"#;
        let result: PredictionResult = serde_json::from_str(body).expect("parses");
        assert_eq!(result.prediction, 0);
        assert!((result.probability.no_diabetes - 0.92).abs() < 1e-9);
        assert!((result.probability.diabetes - 0.08).abs() < 1e-9);
        assert_eq!(result.risk_level, "Low");

        // Probabilities are expected to complement each other.
        let sum = result.probability.no_diabetes + result.probability.diabetes;
        assert!((sum - 1.0).abs() < 1e-6, "probabilities should sum to ~1, got {sum}");
    }

    #[test]
    fn test_assessment_derives_tier() {
        let result = PredictionResult {
            prediction: 1,
            probability: ProbabilitySplit {
                no_diabetes: 0.2,
                diabetes: 0.8,
            },
            risk_level: "HIGH".to_string(),
        };
        let assessment = Assessment::new(result);
        assert_eq!(assessment.tier, RiskTier::High);
        assert_eq!(assessment.result.risk_level, "HIGH");
    }
}
