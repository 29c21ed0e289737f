//! Assessment workflow state machine.
//!
//! One controller owns all mutable session state (input record, latest
//! result, error slot, busy flag) and exposes it only through transition
//! functions:
//!
//! - Idle --edit--> Idle (result cleared, error untouched)
//! - Idle --submit, invalid--> Idle (error set, no request issued)
//! - Idle --submit, valid--> Busy (error cleared, snapshot captured)
//! - Busy --response ok--> Idle (result set, error cleared)
//! - Busy --response err--> Idle (error set, result absent)
//!
//! At most one request is in flight: `begin_submit` refuses while busy.
//! A field edit during Busy does not touch the in-flight snapshot.

use crate::domain::{
    Assessment, AssessmentInput, Gender, PredictionRequest, PredictionResult, SmokingHistory,
    YesNo,
};

/// A single field edit coming from the form.
///
/// Applying an update never fails; range clamping for sliders happens at
/// the edit layer, and malformed numeric text has already been coerced to
/// 0 by the time it reaches here (it then fails range validation on
/// submit rather than being rejected at entry).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldUpdate {
    Gender(Gender),
    Age(i64),
    Hypertension(YesNo),
    HeartDisease(YesNo),
    SmokingHistory(SmokingHistory),
    Bmi(f64),
    HbA1c(f64),
    BloodGlucose(i64),
}

/// Session-lived workflow state for one assessment form.
#[derive(Debug, Default)]
pub struct Workflow {
    input: AssessmentInput,
    result: Option<Assessment>,
    error: Option<String>,
    busy: bool,
}

impl Workflow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input record.
    #[must_use]
    pub fn input(&self) -> &AssessmentInput {
        &self.input
    }

    /// Latest completed assessment, if the inputs have not changed since.
    #[must_use]
    pub fn result(&self) -> Option<&Assessment> {
        self.result.as_ref()
    }

    /// Message for the form's single error slot.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a request is currently in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Apply a field edit.
    ///
    /// Clears any displayed result so it can never go stale against the
    /// inputs; the error message is left untouched.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Gender(v) => self.input.gender = Some(v),
            FieldUpdate::Age(v) => self.input.age = v,
            FieldUpdate::Hypertension(v) => self.input.hypertension = Some(v),
            FieldUpdate::HeartDisease(v) => self.input.heart_disease = Some(v),
            FieldUpdate::SmokingHistory(v) => self.input.smoking_history = Some(v),
            FieldUpdate::Bmi(v) => self.input.bmi = v,
            FieldUpdate::HbA1c(v) => self.input.hba1c_level = v,
            FieldUpdate::BloodGlucose(v) => self.input.blood_glucose_level = v,
        }
        self.result = None;
    }

    /// Gate a submission attempt.
    ///
    /// Returns the immutable wire snapshot to send, or `None` when no
    /// request must be issued: either a request is already in flight, or
    /// validation failed (in which case the error slot holds the message).
    pub fn begin_submit(&mut self) -> Option<PredictionRequest> {
        if self.busy {
            return None;
        }

        match self.input.to_request() {
            Ok(request) => {
                self.error = None;
                self.busy = true;
                Some(request)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Complete the in-flight request.
    ///
    /// Ignored when no request is pending.
    pub fn finish(&mut self, outcome: Result<PredictionResult, String>) {
        if !self.busy {
            return;
        }
        self.busy = false;

        match outcome {
            Ok(result) => {
                self.result = Some(Assessment::new(result));
                self.error = None;
            }
            Err(message) => {
                self.result = None;
                self.error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProbabilitySplit, RiskTier};
    use crate::ports::{Predictor, PredictorError};

    /// Canned-response predictor standing in for the HTTP adapter.
    struct StubPredictor {
        response: Result<PredictionResult, PredictorError>,
    }

    impl Predictor for StubPredictor {
        fn predict(
            &self,
            _request: &PredictionRequest,
        ) -> Result<PredictionResult, PredictorError> {
            self.response.clone()
        }
    }

    fn low_risk_result() -> PredictionResult {
        PredictionResult {
            prediction: 0,
            probability: ProbabilitySplit {
                no_diabetes: 0.92,
                diabetes: 0.08,
            },
            risk_level: "Low".to_string(),
        }
    }

    fn fill_required(workflow: &mut Workflow) {
        workflow.apply(FieldUpdate::Gender(Gender::Female));
        workflow.apply(FieldUpdate::Age(45));
        workflow.apply(FieldUpdate::Hypertension(YesNo::No));
        workflow.apply(FieldUpdate::HeartDisease(YesNo::No));
        workflow.apply(FieldUpdate::SmokingHistory(SmokingHistory::Never));
        workflow.apply(FieldUpdate::Bmi(22.0));
        workflow.apply(FieldUpdate::HbA1c(5.2));
        workflow.apply(FieldUpdate::BloodGlucose(90));
    }

    #[test]
    fn test_initial_state_is_idle() {
        let workflow = Workflow::new();
        assert!(workflow.result().is_none());
        assert!(workflow.error().is_none());
        assert!(!workflow.is_busy());
    }

    #[test]
    fn test_submit_with_unset_gender_makes_no_request() {
        // Scenario C: gender left unset, submit clicked.
        let mut workflow = Workflow::new();
        workflow.apply(FieldUpdate::Age(45));
        workflow.apply(FieldUpdate::Hypertension(YesNo::No));
        workflow.apply(FieldUpdate::HeartDisease(YesNo::No));
        workflow.apply(FieldUpdate::SmokingHistory(SmokingHistory::Never));

        assert!(workflow.begin_submit().is_none());
        assert_eq!(workflow.error(), Some("Please fill in all required fields"));
        assert!(!workflow.is_busy());
    }

    #[test]
    fn test_successful_submission_renders_low_tier() {
        // Scenario A: valid input, service answers Low.
        let stub = StubPredictor {
            response: Ok(low_risk_result()),
        };
        let mut workflow = Workflow::new();
        fill_required(&mut workflow);

        let request = workflow.begin_submit().expect("valid input submits");
        assert!(workflow.is_busy());
        assert!(workflow.error().is_none());

        let outcome = stub.predict(&request).map_err(|e| e.to_string());
        workflow.finish(outcome);

        assert!(!workflow.is_busy());
        let assessment = workflow.result().expect("result stored");
        assert_eq!(assessment.tier, RiskTier::Low);
        assert!((assessment.result.probability.no_diabetes * 100.0 - 92.0).abs() < 1e-9);
        assert!((assessment.result.probability.diabetes * 100.0 - 8.0).abs() < 1e-9);
        assert_eq!(
            assessment.tier.recommendation().expect("low copy").title,
            "Great news!"
        );
        assert!(workflow.error().is_none());
    }

    #[test]
    fn test_failed_request_reports_error_and_reenables_submit() {
        // Scenario B: service answers HTTP 500.
        let stub = StubPredictor {
            response: Err(PredictorError::Status { code: 500 }),
        };
        let mut workflow = Workflow::new();
        fill_required(&mut workflow);

        let request = workflow.begin_submit().expect("valid input submits");
        let outcome = stub.predict(&request).map_err(|e| e.to_string());
        workflow.finish(outcome);

        assert!(!workflow.is_busy());
        assert!(workflow.result().is_none());
        assert_eq!(workflow.error(), Some("Failed to get prediction"));

        // Submit is usable again; no state is stuck.
        assert!(workflow.begin_submit().is_some());
    }

    #[test]
    fn test_edit_clears_result_idempotently() {
        let mut workflow = Workflow::new();
        fill_required(&mut workflow);
        let request = workflow.begin_submit().expect("submits");
        drop(request);
        workflow.finish(Ok(low_risk_result()));
        assert!(workflow.result().is_some());

        workflow.apply(FieldUpdate::Age(46));
        assert!(workflow.result().is_none());

        // Repeated edits keep it cleared, never resurrect a stale result.
        workflow.apply(FieldUpdate::Age(47));
        workflow.apply(FieldUpdate::Bmi(23.0));
        assert!(workflow.result().is_none());
    }

    #[test]
    fn test_edit_leaves_error_untouched() {
        let mut workflow = Workflow::new();
        assert!(workflow.begin_submit().is_none());
        assert!(workflow.error().is_some());

        workflow.apply(FieldUpdate::Age(50));
        assert_eq!(workflow.error(), Some("Please fill in all required fields"));
    }

    #[test]
    fn test_single_flight_gate() {
        let mut workflow = Workflow::new();
        fill_required(&mut workflow);

        assert!(workflow.begin_submit().is_some());
        assert!(workflow.is_busy());
        // Second submission while busy is refused.
        assert!(workflow.begin_submit().is_none());
        // And does not clobber the error slot.
        assert!(workflow.error().is_none());
    }

    #[test]
    fn test_edit_during_busy_does_not_disturb_flight() {
        let mut workflow = Workflow::new();
        fill_required(&mut workflow);
        let request = workflow.begin_submit().expect("submits");

        workflow.apply(FieldUpdate::Age(99));
        assert!(workflow.is_busy());
        // The captured snapshot is immune to the edit.
        assert_eq!(request.age, 45);

        workflow.finish(Ok(low_risk_result()));
        assert!(workflow.result().is_some());
        assert_eq!(workflow.input().age, 99);
    }

    #[test]
    fn test_resubmit_after_resolved_request_is_fresh() {
        let mut workflow = Workflow::new();
        fill_required(&mut workflow);

        let first = workflow.begin_submit().expect("first submit");
        workflow.finish(Ok(low_risk_result()));

        // No edit needed: a resolved request allows a fresh submission.
        let second = workflow.begin_submit().expect("second submit");
        assert_eq!(first, second);
    }

    #[test]
    fn test_validation_error_then_success_clears_error() {
        let mut workflow = Workflow::new();
        workflow.apply(FieldUpdate::Gender(Gender::Male));
        workflow.apply(FieldUpdate::Hypertension(YesNo::No));
        workflow.apply(FieldUpdate::HeartDisease(YesNo::No));
        workflow.apply(FieldUpdate::SmokingHistory(SmokingHistory::Former));
        workflow.apply(FieldUpdate::Age(0));

        assert!(workflow.begin_submit().is_none());
        assert_eq!(workflow.error(), Some("Please enter a valid age (1-120)"));

        workflow.apply(FieldUpdate::Age(52));
        assert!(workflow.begin_submit().is_some());
        assert!(workflow.error().is_none());
    }

    #[test]
    fn test_finish_without_pending_request_is_ignored() {
        let mut workflow = Workflow::new();
        workflow.finish(Ok(low_risk_result()));
        assert!(workflow.result().is_none());
    }
}
