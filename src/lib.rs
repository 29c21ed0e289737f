//! # Glucora
//!
//! Terminal client for diabetes risk assessment backed by an external
//! prediction service.
//!
//! This crate provides:
//! - A validated health-metrics intake form
//! - A single-flight HTTP client for the prediction endpoint
//! - Deterministic risk-tier presentation with contextual guidance
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (assessment input, predictions, risk tiers)
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (HTTP prediction service)
//! - `application`: The assessment workflow state machine
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{Assessment, AssessmentInput, PredictionResult, RiskTier};
pub use ports::{Predictor, PredictorError};
