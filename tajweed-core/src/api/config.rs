//! Configuration API for verse annotation

use std::str::FromStr;

use crate::api::{Error, Script};

/// Processing configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) script: Script,
    pub(crate) merge_adjacent: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script: Script::default(),
            merge_adjacent: true,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Selected script variant
    pub fn script(&self) -> Script {
        self.script
    }

    /// Whether touching same-rule spans are merged
    pub fn merge_adjacent(&self) -> bool {
        self.merge_adjacent
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    script: Option<String>,
    merge_adjacent: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the script variant by code (e.g. "uthmani", "simple")
    pub fn script(mut self, code: impl Into<String>) -> Self {
        self.script = Some(code.into());
        self
    }

    /// Keep each accepted match as its own span instead of merging
    pub fn merge_adjacent(mut self, merge: bool) -> Self {
        self.merge_adjacent = Some(merge);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(code) = self.script {
            config.script = Script::from_str(&code)?;
        }
        if let Some(merge) = self.merge_adjacent {
            config.merge_adjacent = merge;
        }

        Ok(config)
    }
}
