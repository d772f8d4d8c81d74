use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::app_config::{Config, PlaceholderConfig};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::providers::Provider;
use crate::providers::anthropic::Anthropic;
use crate::providers::ollama::Ollama;
use crate::translation::backend::{PhraseTable, ProviderTemplateTranslator, TemplateTranslator};
use crate::translation::document::DocumentTranslator;
use crate::translation::workflow::{PlaceholderWorkflow, WorkflowSummary, results_to_json};

// @module: Application controllers for the two translation pipelines

/// Controller for the direct (whole-document) translator
#[derive(Debug)]
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Load the configuration file; fails before any client is built
    pub fn from_config_path<P: AsRef<Path>>(config_path: P) -> Result<Self, AppError> {
        debug!("Loading config from: {}", config_path.as_ref().display());
        Self::with_config(Config::load(config_path)?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Translate the input file with the configured chat endpoint
    pub async fn run(&self, input_file: &Path, output_file: Option<&Path>) -> Result<(), AppError> {
        let provider = Anthropic::from_config(&self.config)?;
        Self::run_with_provider(provider, input_file, output_file).await
    }

    /// Translate the input file with any provider
    pub async fn run_with_provider<P: Provider>(
        provider: P,
        input_file: &Path,
        output_file: Option<&Path>,
    ) -> Result<(), AppError> {
        debug!("Reading input file: {}", input_file.display());
        let content = FileManager::read_to_string(input_file)?;

        let translator = DocumentTranslator::new(provider);
        let translated = translator.translate_markdown(&content).await?;

        FileManager::write_output(&translated, output_file)?;
        if let Some(path) = output_file {
            info!("Translation saved to: {}", path.display());
        }

        debug!("Translation completed successfully!");
        Ok(())
    }
}

/// Which backend translates the placeholder-bearing templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslationBackend {
    /// Built-in phrase lookup
    #[default]
    PhraseTable,
    /// The local model server
    Model,
}

/// Controller for the placeholder-protected translator
#[derive(Debug)]
pub struct PlaceholderController {
    config: PlaceholderConfig,
    backend: TranslationBackend,
    show_progress: bool,
}

impl PlaceholderController {
    pub fn new(config: PlaceholderConfig, backend: TranslationBackend) -> Self {
        Self {
            config,
            backend,
            show_progress: true,
        }
    }

    /// Disable the progress bar
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn config(&self) -> &PlaceholderConfig {
        &self.config
    }

    /// Process the input file and write the per-paragraph records
    pub async fn run(&self, input_file: &Path, output_file: Option<&Path>) -> Result<WorkflowSummary, AppError> {
        let analyzer = Ollama::from_config(&self.config)?;

        match self.backend {
            TranslationBackend::PhraseTable => {
                self.run_with(analyzer, PhraseTable::default(), input_file, output_file).await
            }
            TranslationBackend::Model => {
                // Templates are translated by a plain client, without the analysis temperature
                let model = Ollama::new(
                    &self.config.endpoint,
                    self.config.model.clone(),
                    std::time::Duration::from_secs(self.config.timeout_secs),
                )?;
                let translator = ProviderTemplateTranslator::new(model);
                self.run_with(analyzer, translator, input_file, output_file).await
            }
        }
    }

    /// Process the input file with explicit analyzer and backend
    pub async fn run_with<P: Provider, T: TemplateTranslator>(
        &self,
        analyzer: P,
        translator: T,
        input_file: &Path,
        output_file: Option<&Path>,
    ) -> Result<WorkflowSummary, AppError> {
        debug!("Reading input file: {}", input_file.display());
        let content = FileManager::read_to_string(input_file)?;

        let workflow = PlaceholderWorkflow::new(analyzer, translator, self.config.target_language.clone());

        let progress = if self.show_progress {
            let bar = ProgressBar::new(0);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} paragraphs {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        let results = workflow.process_document_with(&content, |result, total| {
            progress.set_length(total as u64);
            progress.set_message(if result.is_success() { "" } else { "(last paragraph failed)" });
            progress.inc(1);
        }).await;
        progress.finish_and_clear();

        let summary = WorkflowSummary::from_results(&results);
        FileManager::write_output(&results_to_json(&results)?, output_file)?;

        if let Some(path) = output_file {
            info!(
                "{} paragraphs processed ({} succeeded, {} failed) -> {}",
                summary.total,
                summary.succeeded,
                summary.failed,
                path.display()
            );
        }

        Ok(summary)
    }
}
