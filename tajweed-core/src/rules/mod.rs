//! Rule pattern library
//!
//! A closed, immutable table of Tajweed rule definitions. Each definition
//! pairs a pure predicate over a grapheme window with a priority tier and a
//! stable color key. Every trigger is orthographic (base-letter and mark
//! identity only) — the engine approximates pronunciation rules via text
//! patterns and never infers phonetics.

mod library;
mod predicates;

pub use library::RuleLibrary;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scanner::Window;

/// The closed set of detectable rule kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Merging of a nasalized ending into a following assimilation letter
    Idgham,
    /// Conversion of a nasalized ending before beh
    Iqlab,
    /// Concealment of a nasalized ending before a concealment letter
    Ikhfa,
    /// Nasalization of a geminated noon or meem
    Ghunnah,
    /// Prolonged vowel sound
    Madd,
    /// Doubled consonant on any other letter
    Gemination,
    /// Echoed stop on a qalqalah letter carrying sukun
    Qalqalah,
}

impl RuleKind {
    /// All kinds in fixed scan order (priority-independent).
    pub const ALL: [RuleKind; 7] = [
        RuleKind::Idgham,
        RuleKind::Iqlab,
        RuleKind::Ikhfa,
        RuleKind::Ghunnah,
        RuleKind::Madd,
        RuleKind::Gemination,
        RuleKind::Qalqalah,
    ];

    /// Priority tier; lower wins when spans compete.
    pub fn tier(self) -> u8 {
        match self {
            RuleKind::Idgham | RuleKind::Iqlab => 1,
            RuleKind::Ikhfa | RuleKind::Ghunnah => 2,
            RuleKind::Madd | RuleKind::Gemination => 3,
            RuleKind::Qalqalah => 4,
        }
    }

    /// Stable key the renderer maps to a display color.
    pub fn color_key(self) -> &'static str {
        match self {
            RuleKind::Idgham => "idgham",
            RuleKind::Iqlab => "iqlab",
            RuleKind::Ikhfa => "ikhfa",
            RuleKind::Ghunnah => "ghunnah",
            RuleKind::Madd => "madd",
            RuleKind::Gemination => "gemination",
            RuleKind::Qalqalah => "qalqalah",
        }
    }

    /// Human-readable name for listings.
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Idgham => "Idgham (merging)",
            RuleKind::Iqlab => "Iqlab (conversion)",
            RuleKind::Ikhfa => "Ikhfa (concealment)",
            RuleKind::Ghunnah => "Ghunnah (nasalization)",
            RuleKind::Madd => "Madd (elongation)",
            RuleKind::Gemination => "Gemination (doubling)",
            RuleKind::Qalqalah => "Qalqalah (echoing stop)",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.color_key())
    }
}

/// Elongation length, a sub-attribute of [`RuleKind::Madd`] spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaddDuration {
    /// Plain long vowel, two counts
    Natural,
    /// Long vowel meeting hamza, four counts
    Connected,
    /// Long vowel meeting sukun or shadda, six counts
    Necessary,
}

impl MaddDuration {
    /// Conventional recitation length in counts.
    pub fn counts(self) -> u8 {
        match self {
            MaddDuration::Natural => 2,
            MaddDuration::Connected => 4,
            MaddDuration::Necessary => 6,
        }
    }
}

/// A successful predicate evaluation: how many graphemes the match covers,
/// starting at the window center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    pub len: usize,
    pub duration: Option<MaddDuration>,
}

impl RuleMatch {
    /// Match covering only the center grapheme
    pub fn single() -> Self {
        Self {
            len: 1,
            duration: None,
        }
    }

    /// Match covering the center grapheme and the one after it
    pub fn pair() -> Self {
        Self {
            len: 2,
            duration: None,
        }
    }

    pub fn with_duration(mut self, duration: MaddDuration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// One entry of the rule table.
pub struct RuleDefinition {
    pub kind: RuleKind,
    /// Tier copied from the kind; kept on the definition so the resolver
    /// never reaches back into the table
    pub priority: u8,
    /// Graphemes the predicate requires before the center position
    pub lookbehind: usize,
    /// Graphemes the predicate requires after the center position
    pub lookahead: usize,
    pub color_key: &'static str,
    pub predicate: fn(&Window) -> Option<RuleMatch>,
}

impl std::fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("kind", &self.kind)
            .field("priority", &self.priority)
            .field("lookbehind", &self.lookbehind)
            .field("lookahead", &self.lookahead)
            .field("color_key", &self.color_key)
            .finish()
    }
}

/// Configuration errors detected while constructing the rule library.
///
/// These are programming errors in the static rule tables, surfaced before
/// any verse is processed; they are never produced by a per-verse call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// Two following-letter sets claim the same trigger letter
    #[error("trigger sets '{first}' and '{second}' both contain '{letter}' (U+{codepoint:04X})")]
    OverlappingSets {
        first: &'static str,
        second: &'static str,
        letter: char,
        codepoint: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering_matches_specificity() {
        // The nasalization pair rules outrank everything they can collide with
        assert!(RuleKind::Idgham.tier() < RuleKind::Ikhfa.tier());
        assert!(RuleKind::Iqlab.tier() < RuleKind::Ikhfa.tier());
        assert!(RuleKind::Ghunnah.tier() < RuleKind::Gemination.tier());
        assert!(RuleKind::Gemination.tier() < RuleKind::Qalqalah.tier());
    }

    #[test]
    fn test_color_keys_are_unique() {
        let mut keys: Vec<_> = RuleKind::ALL.iter().map(|k| k.color_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), RuleKind::ALL.len());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&RuleKind::Ikhfa).unwrap();
        assert_eq!(json, "\"ikhfa\"");
        let back: RuleKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RuleKind::Ikhfa);
    }

    #[test]
    fn test_madd_duration_counts() {
        assert_eq!(MaddDuration::Natural.counts(), 2);
        assert_eq!(MaddDuration::Connected.counts(), 4);
        assert_eq!(MaddDuration::Necessary.counts(), 6);
    }
}
