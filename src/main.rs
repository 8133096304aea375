// Main entry point - Dependency injection and terminal setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::application::submission::SubmissionService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_decoder::HttpDecoderService;
use crate::presentation::app::App;
use crate::presentation::ui::run_app;

#[derive(Parser, Debug)]
#[command(about = "Terminal dashboard for liquid-tank sensor payloads")]
struct Cli {
    /// Decoder service endpoint (overrides the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Default tank height in meters (overrides the config file)
    #[arg(long)]
    tank_height: Option<f64>,

    /// Diagnostics log file
    #[arg(long, default_value = "tank-telemetry.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to a file so the terminal surface stays clean
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    // Load configuration, CLI flags win
    let mut config = load_dashboard_config()?;
    if let Some(endpoint) = cli.endpoint {
        config.decoder.endpoint = endpoint;
    }
    if let Some(tank_height) = cli.tank_height {
        config.tank.default_height_m = tank_height;
    }

    // Create the decoder client (infrastructure layer)
    let decoder = Arc::new(HttpDecoderService::new(
        config.decoder.endpoint.clone(),
        Duration::from_secs(config.decoder.timeout_secs),
    )?);

    // Create the submission service (application layer) and controller state
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
    let submissions = SubmissionService::new(decoder, outcome_tx);
    let app = App::new(submissions, config.tank.default_height_m);

    tracing::info!(endpoint = %config.decoder.endpoint, "starting tank-telemetry dashboard");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app, outcome_rx).await;
    cleanup_terminal(&mut terminal)?;
    result
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    terminal.show_cursor()?;
    Ok(())
}
