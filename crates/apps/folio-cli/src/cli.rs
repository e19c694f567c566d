//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Folio site engine CLI.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Build a personal marketing site from headless CMS content")]
#[command(
    long_about = "Folio pulls page content from a headless CMS, maps it into typed \
sections, and renders the landing page.\n\nRun 'folio init' to get started."
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human or json).
    #[arg(short, long, global = true, default_value = "human")]
    pub format: OutputFormatArg,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a starter configuration file.
    ///
    /// Creates the config directory and a default config.toml to fill in.
    Init {
        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },

    /// Snapshot raw entries from the delivery API to a local JSON file.
    Fetch {
        /// Path for the snapshot file.
        #[arg(short, long, default_value = "entries.json")]
        output: PathBuf,
    },

    /// Render the landing page to an HTML file.
    ///
    /// Reads a local snapshot when --input is given, otherwise fetches live.
    Build {
        /// Path to a local entry snapshot.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path for the rendered page.
        #[arg(short, long, default_value = "site/index.html")]
        output: PathBuf,
    },

    /// List the sections the content maps to.
    ///
    /// Reads a local snapshot when --input is given, otherwise fetches live.
    Sections {
        /// Path to a local entry snapshot.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}
