//! Unified public API for tajweed-core
//!
//! This module provides the stable interface for verse annotation, hiding
//! the pipeline internals behind a processor, config, and output types
//! shared by the CLI and any embedding application.

mod config;
mod error;
mod input;
mod output;
mod processor;
mod script;


pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{Output, ProcessingMetadata, ProcessingStats, TajweedSpan};
pub use processor::TajweedProcessor;
pub use script::Script;
