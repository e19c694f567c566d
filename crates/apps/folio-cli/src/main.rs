//! Folio CLI binary entry point.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use folio_cli::{
    cli::{Cli, Commands},
    commands,
    config::CliConfig,
    error::{CliError, CliResult},
};

fn main() {
    let cli = Cli::parse();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    rt.block_on(async_main(cli));
}

async fn async_main(cli: Cli) {
    // Initialize logging based on --verbose flag or RUST_LOG env var
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if cli.verbose || has_rust_log {
        let filter = if cli.verbose {
            EnvFilter::from_default_env()
                .add_directive("folio_cli=debug".parse().unwrap())
                .add_directive("folio_client=debug".parse().unwrap())
        } else {
            EnvFilter::from_default_env()
        };
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    if let Err(e) = run(cli).await {
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let format = cli.format.into();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::load_default()?,
    };

    let output = match cli.command {
        Commands::Init { force } => commands::init(cli.config, force, format)?,
        Commands::Fetch { output } => commands::fetch(config, format, output).await?,
        Commands::Build { input, output } => {
            commands::build(config, format, input, output).await?
        }
        Commands::Sections { input } => commands::sections(config, format, input).await?,
    };

    println!("{}", output);
    Ok(())
}

/// Print a user-friendly error message with a recovery hint when available.
fn print_error(e: &CliError) {
    eprintln!("{}: {}", "Error".red().bold(), e);

    if let Some(hint) = e.hint() {
        eprintln!("{}: {}", "Hint".cyan(), hint);
    }
}
