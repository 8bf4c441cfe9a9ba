//! Rule library construction and load-time validation

use crate::chars;
use crate::rules::{predicates, LibraryError, RuleDefinition, RuleKind};

/// The immutable rule table.
///
/// Built once at process start and shared read-only (typically behind an
/// `Arc`) across concurrent verse analyses. Construction validates that the
/// nasalization-family trigger sets form a true partition; an overlap is a
/// configuration bug and fails fast before any verse is processed.
#[derive(Debug)]
pub struct RuleLibrary {
    rules: Vec<RuleDefinition>,
}

impl RuleLibrary {
    /// Build and validate the rule table.
    pub fn new() -> Result<Self, LibraryError> {
        validate_partition(&[
            ("idgham", chars::IDGHAM_SET),
            ("iqlab", chars::IQLAB_SET),
            ("ikhfa", chars::IKHFA_SET),
        ])?;

        // Fixed scan order; only the resolver looks at priority.
        let rules = vec![
            definition(RuleKind::Idgham, 0, 1, predicates::idgham),
            definition(RuleKind::Iqlab, 0, 1, predicates::iqlab),
            definition(RuleKind::Ikhfa, 0, 1, predicates::ikhfa),
            definition(RuleKind::Ghunnah, 0, 0, predicates::ghunnah),
            definition(RuleKind::Madd, 0, 0, predicates::madd),
            definition(RuleKind::Gemination, 0, 0, predicates::gemination),
            definition(RuleKind::Qalqalah, 0, 0, predicates::qalqalah),
        ];

        Ok(Self { rules })
    }

    /// All rule definitions in scan order.
    pub fn rules(&self) -> &[RuleDefinition] {
        &self.rules
    }

    /// Look up the definition for a kind.
    pub fn definition(&self, kind: RuleKind) -> &RuleDefinition {
        self.rules
            .iter()
            .find(|r| r.kind == kind)
            .expect("every RuleKind has a definition")
    }
}

fn definition(
    kind: RuleKind,
    lookbehind: usize,
    lookahead: usize,
    predicate: fn(&crate::scanner::Window) -> Option<crate::rules::RuleMatch>,
) -> RuleDefinition {
    RuleDefinition {
        kind,
        priority: kind.tier(),
        lookbehind,
        lookahead,
        color_key: kind.color_key(),
        predicate,
    }
}

/// Reject any letter claimed by more than one following-letter set.
fn validate_partition(sets: &[(&'static str, &[char])]) -> Result<(), LibraryError> {
    for (i, &(first, a)) in sets.iter().enumerate() {
        for &(second, b) in sets.iter().skip(i + 1) {
            if let Some(letter) = a.iter().copied().find(|ch| b.contains(ch)) {
                return Err(LibraryError::OverlappingSets {
                    first,
                    second,
                    letter,
                    codepoint: letter as u32,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_builds() {
        let library = RuleLibrary::new().unwrap();
        assert_eq!(library.rules().len(), RuleKind::ALL.len());
    }

    #[test]
    fn test_every_kind_has_one_definition() {
        let library = RuleLibrary::new().unwrap();
        for kind in RuleKind::ALL {
            let def = library.definition(kind);
            assert_eq!(def.kind, kind);
            assert_eq!(def.priority, kind.tier());
            assert_eq!(def.color_key, kind.color_key());
        }
    }

    #[test]
    fn test_shipped_sets_partition() {
        assert!(validate_partition(&[
            ("idgham", chars::IDGHAM_SET),
            ("iqlab", chars::IQLAB_SET),
            ("ikhfa", chars::IKHFA_SET),
        ])
        .is_ok());
    }

    #[test]
    fn test_overlapping_sets_rejected() {
        let err = validate_partition(&[
            ("first", &[chars::BEH, chars::TEH]),
            ("second", &[chars::TEH]),
        ])
        .unwrap_err();
        match err {
            LibraryError::OverlappingSets {
                first,
                second,
                letter,
                ..
            } => {
                assert_eq!(first, "first");
                assert_eq!(second, "second");
                assert_eq!(letter, chars::TEH);
            }
        }
    }

    #[test]
    fn test_pair_rules_declare_lookahead() {
        let library = RuleLibrary::new().unwrap();
        for kind in [RuleKind::Idgham, RuleKind::Iqlab, RuleKind::Ikhfa] {
            assert_eq!(library.definition(kind).lookahead, 1);
        }
    }
}
