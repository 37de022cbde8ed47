//! Locate command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use locus_api::{BatchOutput, Config, RuleLocator, RuleRecord};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the locate command
#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Documents to search, one paragraph per line (supports glob)
    #[arg(short = 'd', long = "document", value_name = "FILE/PATTERN", required = true)]
    pub documents: Vec<String>,

    /// Rules file (.json or .toml)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "LOCUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Never disregard punctuation when searching
    #[arg(long)]
    pub strict: bool,

    /// Number of worker threads (default: one per CPU)
    #[arg(short = 't', long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per rule with a summary per document
    Text,
    /// JSON array with one object per document
    Json,
    /// One markdown table per document
    Markdown,
}

impl LocateArgs {
    /// Execute the locate command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting locate");
        log::debug!("Arguments: {:?}", self);

        let locator = RuleLocator::with_config(self.load_config()?)
            .context("Failed to build locator")?;
        let rules = FileReader::read_rules(&self.rules)?;
        if rules.is_empty() {
            return Err(CliError::RulesError(format!(
                "no rules in {}",
                self.rules.display()
            ))
            .into());
        }
        let files = resolve_patterns(&self.documents)?;
        log::info!(
            "Locating {} rule(s) in {} document(s)",
            rules.len(),
            files.len()
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(files.len() as u64);

        let results = match self.threads {
            Some(0) => {
                return Err(
                    CliError::ConfigError("threads must be at least 1".to_string()).into(),
                )
            }
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?
                .install(|| locate_documents(&locator, &rules.rules, &files, &progress)),
            None => locate_documents(&locator, &rules.rules, &files, &progress),
        };
        progress.finish();
        let results = results?;

        let mut formatter = self.create_formatter()?;
        for (path, output) in &results {
            formatter.format_document(path, output)?;
        }
        formatter.finish()?;

        Ok(())
    }

    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => Config::default(),
        };
        if self.strict {
            config.locator.ignore_punctuation = false;
        }
        Ok(config)
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second init (e.g. from tests) keeps the first logger
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Locate the rules in every document; results keep document order
fn locate_documents(
    locator: &RuleLocator,
    rules: &[RuleRecord],
    files: &[PathBuf],
    progress: &ProgressReporter,
) -> Result<Vec<(PathBuf, BatchOutput)>> {
    files
        .par_iter()
        .map(|path| -> Result<(PathBuf, BatchOutput)> {
            let output = locate_document(locator, rules, path)?;
            progress.document_completed(&display_name(path));
            Ok((path.clone(), output))
        })
        .collect()
}

fn locate_document(locator: &RuleLocator, rules: &[RuleRecord], path: &Path) -> Result<BatchOutput> {
    let text = FileReader::read_text(path)?;
    let output = locator.locate_text(&text, rules);
    log::debug!(
        "{}: {} located, {} degraded, {} not found",
        path.display(),
        output.summary.located,
        output.summary.degraded,
        output.summary.not_found
    );
    Ok(output)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
