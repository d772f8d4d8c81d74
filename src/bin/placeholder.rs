// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::error;
use std::path::PathBuf;

use mdtrans::app_config::PlaceholderConfig;
use mdtrans::app_controller::{PlaceholderController, TranslationBackend};
use mdtrans::language_utils::resolve_target_language;
use mdtrans::logging::{CliLogger, effective_level};

/// CLI Wrapper for TranslationBackend to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliBackend {
    PhraseTable,
    Model,
}

impl From<CliBackend> for TranslationBackend {
    fn from(cli_backend: CliBackend) -> Self {
        match cli_backend {
            CliBackend::PhraseTable => TranslationBackend::PhraseTable,
            CliBackend::Model => TranslationBackend::Model,
        }
    }
}

/// Placeholder-protected translation helper
///
/// Splits a text file into paragraphs, asks a local model to separate
/// technical terms into placeholders, translates the rest and restores
/// the terms. Results are written as indented JSON.
#[derive(Parser, Debug)]
#[command(name = "mdtrans-placeholder")]
#[command(version)]
#[command(about = "Translate a text file paragraph by paragraph while keeping technical terms intact")]
struct CommandLineOptions {
    /// Text file to process
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Output JSON file (default: stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Local model used for analysis
    #[arg(short, long, default_value = "translation-helper")]
    model: String,

    /// Local model server URL
    #[arg(long, env = "OLLAMA_HOST", default_value = "http://localhost:11434")]
    host: String,

    /// Target language name or ISO code (e.g. 'ja', 'Japanese')
    #[arg(short, long, default_value = "Japanese")]
    target_language: String,

    /// Backend that translates the placeholder-bearing text
    #[arg(short, long, value_enum, default_value = "phrase-table")]
    backend: CliBackend,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() {
    let cli = CommandLineOptions::parse();

    if let Err(e) = CliLogger::init(effective_level(cli.verbose, None)) {
        eprintln!("Error: failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(options: CommandLineOptions) -> Result<()> {
    let config = PlaceholderConfig {
        model: options.model,
        endpoint: options.host,
        target_language: resolve_target_language(&options.target_language),
        timeout_secs: options.timeout_secs,
        ..PlaceholderConfig::default()
    };

    let controller = PlaceholderController::new(config, options.backend.into());
    let controller = if options.verbose { controller.quiet() } else { controller };

    controller.run(&options.input_file, options.output.as_deref()).await?;
    Ok(())
}
