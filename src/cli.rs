//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "gradeline",
    version,
    about = "Terminal dashboard of evaluation scores by region"
)]
pub struct Cli {
    /// Spreadsheet to open (.xlsx, .xlsm, .xlsb, .xls, .ods or .csv)
    #[arg(env = "GRADELINE_INPUT")]
    pub file: Option<PathBuf>,

    /// Read configuration from this TOML file instead of the user config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ignore configuration files (built-in defaults + flags only)
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Page title shown above the chart
    #[arg(long)]
    pub title: Option<String>,

    /// Sheet to show first (default: first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Group to show first (default: first alphabetically)
    #[arg(long)]
    pub group: Option<String>,

    /// Export the selection to a Markdown file (non-interactive)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the selection as Markdown to stdout (non-interactive)
    #[arg(long, conflicts_with = "output")]
    pub print: bool,

    /// Keybindings: vim or emacs
    #[arg(long)]
    pub keymap: Option<String>,

    /// Write logs to this file
    #[arg(long, env = "GRADELINE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// True when the run produces a report instead of opening the UI.
    pub fn is_batch(&self) -> bool {
        self.print || self.output.is_some()
    }
}
