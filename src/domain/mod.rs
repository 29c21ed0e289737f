//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no I/O dependencies.
//! Input validation and risk presentation live here so they can be
//! tested without a running prediction service.

mod assessment;
mod prediction;
mod risk;

pub use assessment::{
    AssessmentInput, Gender, SmokingHistory, ValidationError, YesNo, AGE_MAX, AGE_MIN,
    BMI_UI_MAX, BMI_UI_MIN, BMI_VALID_MAX, BMI_VALID_MIN, GLUCOSE_UI_MAX, GLUCOSE_UI_MIN,
    HBA1C_UI_MAX, HBA1C_UI_MIN,
};
pub use prediction::{Assessment, PredictionRequest, PredictionResult, ProbabilitySplit};
pub use risk::{bmi_category, Recommendation, RiskTier};
