//! TUI module: Terminal User Interface using Ratatui.
//!
//! Single-screen layout mirroring the assessment workflow:
//! - Health information form (left column)
//! - Risk assessment panel (right column)
//! - Medical disclaimer strip (bottom)

mod app;
mod styles;
mod ui;
mod worker;

pub use app::App;
pub use styles::ClinicalTheme;
pub use worker::{PredictionEvent, PredictionWorker, PredictionWorkerHandle};
