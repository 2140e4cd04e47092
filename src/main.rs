//! Hours Estimator - Main entry point
//!
//! Launches the interactive form, or runs one of the headless listing and
//! estimate commands.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Write};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use hours_estimator::cli::{Cli, Commands};
use hours_estimator::{report, App, Catalog, EstimationEngine};

/// Initialize the logger. `RUST_LOG` overrides the default level.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    info!("Hours estimator starting up");

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut out = stdout().lock();

    match cli.command.unwrap_or(Commands::Form) {
        Commands::Form => {
            drop(out);
            run_form()?;
        }
        Commands::Categories { json } => {
            report::write_categories(&mut out, Catalog::builtin(), json)
                .context("Failed to list categories")?;
        }
        Commands::Tasks { category, json } => {
            report::write_tasks(&mut out, Catalog::builtin(), &category, json)
                .with_context(|| format!("Failed to list tasks of '{}'", category))?;
        }
        Commands::Estimate {
            category,
            task,
            size,
            json,
        } => {
            debug!("Headless estimate: {}/{} ({})", category, task, size);
            let mut engine = EstimationEngine::with_builtin_catalog();
            let estimate = report::run_estimate(&mut engine, &category, &task, &size)
                .context("Estimate failed")?;
            report::write_estimate(&mut out, &estimate, json)?;
        }
    }

    Ok(())
}

/// Run the interactive form
fn run_form() -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    if let Err(e) = crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let mut app = App::new();
            app.run(&mut terminal).context("Form loop failed")
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);
    let _ = stdout().flush();

    result
}
