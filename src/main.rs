// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use log::{LevelFilter, error};
use std::path::PathBuf;

use mdtrans::app_controller::Controller;
use mdtrans::logging::{CliLogger, effective_level};

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for mdtrans
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// mdtrans - translate English markdown blog posts to Japanese
#[derive(Parser, Debug)]
#[command(name = "mdtrans")]
#[command(version)]
#[command(about = "Translate English markdown files to Japanese using the Claude API")]
#[command(long_about = "Translate English markdown files to Japanese using the Claude API.

EXAMPLES:
    mdtrans input.md --config config.json --output output.md
    mdtrans input.md --config config.json > output.md
    mdtrans completions bash > mdtrans.bash

CONFIGURATION (JSON):
    {
      \"api_key\": \"your-claude-api-key-here\"
    }

Optional keys: model, max_tokens, endpoint, timeout_secs, log_level.")]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input markdown file to translate
    #[arg(value_name = "INPUT_FILE", required = true)]
    input_file: Option<PathBuf>,

    /// JSON config file containing the API key
    #[arg(short, long, value_name = "CONFIG", required = true)]
    config: Option<PathBuf>,

    /// Output markdown file (default: stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "mdtrans", &mut std::io::stdout());
        return;
    }

    if let Err(e) = CliLogger::init(effective_level(cli.verbose, None)) {
        eprintln!("Error: failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run_translate(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run_translate(options: CommandLineOptions) -> Result<()> {
    let input_file = options.input_file
        .context("INPUT_FILE is required")?;
    let config_path = options.config
        .context("--config is required")?;

    let controller = Controller::from_config_path(&config_path)?;

    // The configured level applies unless --verbose was given
    if !options.verbose {
        log::set_max_level(effective_level(false, Some(LevelFilter::from(controller.config().log_level))));
    }

    controller.run(&input_file, options.output.as_deref()).await?;
    Ok(())
}
