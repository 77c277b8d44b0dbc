//! Gradeline - score dashboard for the terminal

mod cli;
mod config;
mod error;
mod logging;
#[cfg(feature = "tui")]
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use gradeline_core::Dashboard;
use gradeline_core::storage::{load_workbook, render_markdown, write_markdown};
use std::io::Write;
use std::process::ExitCode;

use cli::Cli;
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let (mut config, warnings) = if cli.no_config {
        (Config::default(), Vec::new())
    } else {
        Config::load(cli.config.as_deref())
    };
    config.apply_cli(&cli);

    let _guard = match logging::init_logging(&config.log) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Warning: logging disabled: {err:#}");
            None
        }
    };
    for warning in &warnings {
        tracing::warn!("{}", warning);
        eprintln!("Warning: {}", warning);
    }

    let workbook = load_workbook(&config.input)?;
    let dashboard = Dashboard::new(workbook, config.reshape_options(), config.axis_labels())?;

    let sheet = match cli.sheet.as_deref() {
        Some(name) => name.to_string(),
        None => dashboard
            .sheet_names()
            .first()
            .map(|s| s.to_string())
            .context("Workbook has no sheets")?,
    };

    if cli.is_batch() {
        let view = dashboard.view(&sheet, cli.group.as_deref())?;
        if let Some(path) = cli.output.as_deref() {
            write_markdown(path, &config.title, &view)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported to {}", path.display());
        } else {
            let mut stdout = std::io::stdout().lock();
            render_markdown(&mut stdout, &config.title, &view)?;
            stdout.flush()?;
        }
        return Ok(());
    }

    run_interactive(dashboard, &config, &sheet, cli.group.as_deref())
}

#[cfg(feature = "tui")]
fn run_interactive(
    dashboard: Dashboard,
    config: &Config,
    sheet: &str,
    group: Option<&str>,
) -> Result<()> {
    let keymap = match tui::Keymap::from_name(&config.keymap) {
        Some(keymap) => keymap,
        None => {
            eprintln!("Warning: Unknown keymap '{}', using vim", config.keymap);
            tui::Keymap::Vim
        }
    };
    let mut app = tui::App::with_selection(dashboard, config.title.clone(), keymap, sheet, group)?;
    tracing::info!(sheet, keymap = app.keymap.name(), "starting terminal UI");
    tui::run(&mut app).context("Terminal UI failed")
}

#[cfg(not(feature = "tui"))]
fn run_interactive(
    _dashboard: Dashboard,
    _config: &Config,
    _sheet: &str,
    _group: Option<&str>,
) -> Result<()> {
    anyhow::bail!("Built without the terminal UI; use --print or --output")
}
