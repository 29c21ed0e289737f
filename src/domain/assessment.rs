//! Assessment input types for diabetes risk prediction.
//!
//! The input record mirrors the feature set the prediction service was
//! trained on. Required categorical fields start unset (`None`) and must
//! be chosen explicitly; numeric fields always hold a value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::prediction::PredictionRequest;

/// Valid age range accepted by validation.
pub const AGE_MIN: i64 = 1;
pub const AGE_MAX: i64 = 120;

/// Valid BMI range accepted by validation.
pub const BMI_VALID_MIN: f64 = 10.0;
pub const BMI_VALID_MAX: f64 = 60.0;

/// BMI range adjustable from the form slider (narrower than validation).
pub const BMI_UI_MIN: f64 = 15.0;
pub const BMI_UI_MAX: f64 = 50.0;

/// HbA1c range adjustable from the form slider (%).
pub const HBA1C_UI_MIN: f64 = 3.0;
pub const HBA1C_UI_MAX: f64 = 15.0;

/// Blood glucose range adjustable from the form slider (mg/dL).
pub const GLUCOSE_UI_MIN: i64 = 50;
pub const GLUCOSE_UI_MAX: i64 = 300;

/// Biological sex as understood by the prediction model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Yes/No answer for the diagnosed-condition questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::No, YesNo::Yes];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

/// Smoking history categories matching the model's training data.
///
/// Wire strings are exact, including the space in "not current" and the
/// capitalization of "No Info".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingHistory {
    #[serde(rename = "never")]
    Never,
    #[serde(rename = "former")]
    Former,
    #[serde(rename = "current")]
    Current,
    #[serde(rename = "not current")]
    NotCurrent,
    #[serde(rename = "ever")]
    Ever,
    #[serde(rename = "No Info")]
    NoInfo,
}

impl SmokingHistory {
    pub const ALL: [SmokingHistory; 6] = [
        SmokingHistory::Never,
        SmokingHistory::Former,
        SmokingHistory::Current,
        SmokingHistory::NotCurrent,
        SmokingHistory::Ever,
        SmokingHistory::NoInfo,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::Former => "Former smoker",
            Self::Current => "Current smoker",
            Self::NotCurrent => "Not current",
            Self::Ever => "Ever smoked",
            Self::NoInfo => "No information",
        }
    }
}

/// Validation failure for an assessment input.
///
/// `Display` is the exact message shown next to the form. Rules are checked
/// in a fixed order and only the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequired,
    #[error("Please enter a valid age (1-120)")]
    AgeOutOfRange,
    #[error("Please enter a valid BMI (10-60)")]
    BmiOutOfRange,
}

/// Self-reported health metrics entered through the form.
///
/// Lives for the whole session and is mutated by every field edit. The
/// sliders cannot produce out-of-range values for `hba1c_level` and
/// `blood_glucose_level`, so those carry no hard validation bound.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentInput {
    pub gender: Option<Gender>,
    pub age: i64,
    pub hypertension: Option<YesNo>,
    pub heart_disease: Option<YesNo>,
    pub smoking_history: Option<SmokingHistory>,
    pub bmi: f64,
    pub hba1c_level: f64,
    pub blood_glucose_level: i64,
}

impl Default for AssessmentInput {
    fn default() -> Self {
        Self {
            gender: None,
            age: 30,
            hypertension: None,
            heart_disease: None,
            smoking_history: None,
            bmi: 25.0,
            hba1c_level: 5.5,
            blood_glucose_level: 100,
        }
    }
}

impl AssessmentInput {
    /// Check the input against the submission rules.
    ///
    /// # Errors
    /// Returns the first failing rule, in order: required fields, age
    /// range, BMI range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_request().map(|_| ())
    }

    /// Validate and capture an immutable wire snapshot for submission.
    ///
    /// # Errors
    /// Same rules and ordering as [`AssessmentInput::validate`].
    pub fn to_request(&self) -> Result<PredictionRequest, ValidationError> {
        let (Some(gender), Some(hypertension), Some(heart_disease), Some(smoking_history)) = (
            self.gender,
            self.hypertension,
            self.heart_disease,
            self.smoking_history,
        ) else {
            return Err(ValidationError::MissingRequired);
        };

        if !(AGE_MIN..=AGE_MAX).contains(&self.age) {
            return Err(ValidationError::AgeOutOfRange);
        }
        if !(BMI_VALID_MIN..=BMI_VALID_MAX).contains(&self.bmi) {
            return Err(ValidationError::BmiOutOfRange);
        }

        Ok(PredictionRequest {
            gender,
            age: self.age,
            hypertension,
            heart_disease,
            smoking_history,
            bmi: self.bmi,
            hba1c_level: self.hba1c_level,
            blood_glucose_level: self.blood_glucose_level,
        })
    }
}
