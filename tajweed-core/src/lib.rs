//! Tajweed rule detection engine for Qur'anic Arabic text
//!
//! This crate analyzes Arabic verse text character by character and emits
//! non-overlapping, precedence-resolved annotation spans, one per detected
//! pronunciation (Tajweed) rule, for consumption by a color-coding renderer.
//!
//! # Architecture
//!
//! The engine is a pure pipeline with no I/O and no shared mutable state:
//! - **Segmenter**: splits text into graphemes (base letter + diacritic stack)
//! - **Rule pattern library**: immutable table of windowed trigger predicates
//! - **Window scanner**: evaluates every rule at every grapheme position
//! - **Conflict resolver**: deterministic greedy selection by priority tier
//! - **Span assembler**: maps accepted matches back to text offsets
//!
//! # Example
//!
//! ```rust
//! use tajweed_core::{Input, TajweedProcessor};
//!
//! let processor = TajweedProcessor::new();
//! let output = processor.process(Input::from_text("بِسْمِ")).unwrap();
//!
//! // The sukun-marked seen before meem merges: one tier-1 span
//! assert!(!output.spans.is_empty());
//! for span in &output.spans {
//!     println!("{} [{}, {})", span.color_key, span.start, span.end);
//! }
//! ```

pub mod api;
pub mod assembler;
pub mod chars;
pub mod engine;
pub mod resolver;
pub mod rules;
pub mod scanner;
pub mod segmenter;

pub use api::{
    Config, ConfigBuilder, Error, Input, Output, ProcessingMetadata, ProcessingStats, Script,
    TajweedProcessor, TajweedSpan,
};
pub use rules::{LibraryError, MaddDuration, RuleKind, RuleLibrary};
pub use segmenter::{Grapheme, GraphemeKind};
