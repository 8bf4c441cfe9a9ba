//! Annotate command implementation

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use tajweed_core::{segmenter, TajweedProcessor};

use crate::input;
use crate::output::{AnnotatedDocument, HtmlFormatter, JsonFormatter, SpanFormatter, TextFormatter};

/// Arguments for the annotate command
#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Annotate this verse text directly instead of reading files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Script variant of the input text
    #[arg(short, long, default_value = "uthmani")]
    pub script: String,

    /// Keep each match as its own span instead of merging touching spans
    #[arg(long)]
    pub no_merge: bool,

    /// Annotate input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One span per line with rule name and offsets
    Text,
    /// JSON array of documents with span metadata
    Json,
    /// Color-painted HTML preview
    Html,
}

impl AnnotateArgs {
    /// Execute the annotate command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let processor = self.build_processor()?;
        let sources = self.collect_sources()?;

        log::info!("Annotating {} document(s)", sources.len());

        let documents = if self.parallel {
            sources
                .into_par_iter()
                .map(|(source, raw)| annotate_one(&processor, source, raw))
                .collect::<Vec<_>>()
        } else {
            sources
                .into_iter()
                .map(|(source, raw)| annotate_one(&processor, source, raw))
                .collect()
        };

        self.write_output(&documents)
    }

    fn build_processor(&self) -> Result<TajweedProcessor> {
        let config = tajweed_core::Config::builder()
            .script(self.script.clone())
            .merge_adjacent(!self.no_merge)
            .build()
            .context("invalid configuration")?;
        TajweedProcessor::with_config(config).context("rule library failed validation")
    }

    /// Gather (source name, raw text) pairs from --text, files, or stdin.
    fn collect_sources(&self) -> Result<Vec<(String, String)>> {
        if let Some(text) = &self.text {
            return Ok(vec![("text".to_string(), text.clone())]);
        }
        if self.input.is_empty() {
            return Ok(vec![("stdin".to_string(), input::read_stdin()?)]);
        }

        let files = input::resolve_patterns(&self.input)?;
        files
            .into_iter()
            .map(|path| {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Ok((path.display().to_string(), raw))
            })
            .collect()
    }

    fn write_output(&self, documents: &[AnnotatedDocument]) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn SpanFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
        };

        for doc in documents {
            formatter.write_document(doc)?;
        }
        formatter.finish()
    }

    fn init_logging(&self) {
        if self.quiet {
            return;
        }
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

/// Annotate one document. Offsets refer to the NFC text, so the document
/// stores the NFC form for formatters to slice into.
fn annotate_one(processor: &TajweedProcessor, source: String, raw: String) -> AnnotatedDocument {
    let text = segmenter::normalize(&raw).into_owned();
    let spans = processor.annotate(&text);
    log::debug!("{}: {} span(s)", source, spans.len());
    AnnotatedDocument {
        source,
        text,
        spans,
    }
}
