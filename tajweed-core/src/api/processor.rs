//! Main tajweed processor implementation

use std::sync::Arc;
use std::time::Instant;

use crate::api::{Config, Error, Input, Output, TajweedSpan};
use crate::engine;
use crate::rules::RuleLibrary;

/// Verse annotator with a validated, shared rule library.
///
/// Construction validates the rule library once; afterwards the processor
/// is immutable and `Send + Sync`, so one instance may serve concurrent
/// verse analyses (e.g. pre-computing a whole corpus) without locking.
#[derive(Debug)]
pub struct TajweedProcessor {
    library: Arc<RuleLibrary>,
    config: Config,
}

impl TajweedProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default()).expect("default rule library is valid")
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        let library = Arc::new(RuleLibrary::new()?);
        Ok(Self { library, config })
    }

    /// Create a processor for a specific script variant
    pub fn with_script(code: impl Into<String>) -> Result<Self, Error> {
        let config = Config::builder().script(code).build()?;
        Self::with_config(config)
    }

    /// Process input and return annotation spans with metadata.
    ///
    /// Only input acquisition can fail (file/reader I/O, invalid UTF-8);
    /// the analysis itself always succeeds, possibly with zero spans.
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        let text = input.into_text()?;
        let start = Instant::now();

        let analysis = engine::annotate(
            &text,
            self.config.script,
            &self.library,
            self.config.merge_adjacent,
        );

        let duration = start.elapsed();
        Ok(Output::from_analysis(analysis, &text, duration))
    }

    /// Annotate verse text directly. Infallible; returns only the spans.
    pub fn annotate(&self, text: &str) -> Vec<TajweedSpan> {
        engine::annotate(
            text,
            self.config.script,
            &self.library,
            self.config.merge_adjacent,
        )
        .spans
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The validated rule library backing this processor
    pub fn library(&self) -> &RuleLibrary {
        &self.library
    }
}

impl Default for TajweedProcessor {
    fn default() -> Self {
        Self::new()
    }
}
