//! Glucora: Terminal diabetes risk assessment client.
//!
//! Main entry point for the terminal application.

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use glucora::adapters::HttpPredictor;
use glucora::tui::App;

fn main() -> Result<()> {
    // Initialize logging.
    //
    // IMPORTANT: writing logs to the terminal would corrupt the TUI
    // (alternate screen). Default behavior:
    // - interactive TTY: log to a file
    // - non-interactive: log to stdout
    let log_mode =
        std::env::var("GLUCORA_LOG_MODE").unwrap_or_else(|_| "auto".to_string());

    let interactive = std::io::stdout().is_terminal();
    let use_file = match log_mode.as_str() {
        "file" => true,
        "stdout" => false,
        // auto
        _ => interactive,
    };

    let (writer, _guard) = if use_file {
        let log_file = std::env::var("GLUCORA_LOG_FILE")
            .unwrap_or_else(|_| "glucora.log".to_string());

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .with_context(|| format!("Failed to open log file {log_file}"))?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    // Prediction endpoint is resolved at startup, not user-editable from
    // within the form.
    let base_url = std::env::var("GLUCORA_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

    tracing::info!("Starting Glucora against {}", base_url);

    let predictor =
        HttpPredictor::new(base_url).context("Failed to initialize prediction client")?;

    let mut app = App::new(Arc::new(predictor));
    app.run()?;

    tracing::info!("Glucora shutdown complete.");
    Ok(())
}
