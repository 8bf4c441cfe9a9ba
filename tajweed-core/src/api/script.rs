//! Script variant type for the API

use std::fmt;
use std::str::FromStr;

use crate::api::Error;

/// Supported Qur'anic script variants.
///
/// The variant only selects the normalization/classification table; rule
/// logic is identical across variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    /// Uthmani orthography with Qur'anic annotation marks
    #[default]
    Uthmani,
    /// Simple (Imlaei) orthography with plain harakat only
    Simple,
}

impl Script {
    /// Get the script code
    pub fn code(&self) -> &'static str {
        match self {
            Script::Uthmani => "uthmani",
            Script::Simple => "simple",
        }
    }

    /// Get the full script name
    pub fn name(&self) -> &'static str {
        match self {
            Script::Uthmani => "Uthmani",
            Script::Simple => "Simple (Imlaei)",
        }
    }
}

impl FromStr for Script {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.to_lowercase().as_str() {
            "uthmani" | "hafs" => Ok(Script::Uthmani),
            "simple" | "imlaei" | "imlai" => Ok(Script::Simple),
            other => Err(Error::InvalidScript(other.to_string())),
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
