//! Application layer: The assessment workflow.
//!
//! This module orchestrates the domain types to implement the
//! edit/validate/submit/present lifecycle of a risk assessment.

mod workflow;

pub use workflow::{FieldUpdate, Workflow};
