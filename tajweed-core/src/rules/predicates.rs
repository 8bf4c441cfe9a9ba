//! Rule trigger predicates
//!
//! Each predicate is a pure function of a grapheme window centered at the
//! candidate position. A `None` means the rule does not apply there; out of
//! bounds neighbors read as `None` through the window accessors, so no
//! predicate can fault near the text edges.

use crate::chars;
use crate::rules::{MaddDuration, RuleMatch};
use crate::scanner::Window;
use crate::segmenter::Grapheme;

/// Shared trigger for the nasalization family: a letter carrying sukun or
/// tanween, followed immediately by a letter from the rule's set.
fn nasalized_before(window: &Window, set: &[char]) -> Option<RuleMatch> {
    let current = window.current();
    if !current.is_letter() || !current.has_mark_where(chars::is_nasalization_mark) {
        return None;
    }
    let next = window.after(1)?;
    if next.is_letter() && set.contains(&next.base) {
        Some(RuleMatch::pair())
    } else {
        None
    }
}

pub(super) fn idgham(window: &Window) -> Option<RuleMatch> {
    nasalized_before(window, chars::IDGHAM_SET)
}

pub(super) fn iqlab(window: &Window) -> Option<RuleMatch> {
    nasalized_before(window, chars::IQLAB_SET)
}

pub(super) fn ikhfa(window: &Window) -> Option<RuleMatch> {
    nasalized_before(window, chars::IKHFA_SET)
}

pub(super) fn ghunnah(window: &Window) -> Option<RuleMatch> {
    let current = window.current();
    let nasal_base = current.base == chars::NOON || current.base == chars::MEEM;
    if current.is_letter() && nasal_base && current.has_mark(chars::SHADDA) {
        Some(RuleMatch::single())
    } else {
        None
    }
}

pub(super) fn gemination(window: &Window) -> Option<RuleMatch> {
    let current = window.current();
    if current.is_letter() && current.has_mark(chars::SHADDA) {
        Some(RuleMatch::single())
    } else {
        None
    }
}

pub(super) fn qalqalah(window: &Window) -> Option<RuleMatch> {
    let current = window.current();
    if current.is_letter()
        && current.has_mark(chars::SUKUN)
        && chars::QALQALAH_SET.contains(&current.base)
    {
        Some(RuleMatch::single())
    } else {
        None
    }
}

fn carries_hamza(g: &Grapheme) -> bool {
    g.base == chars::HAMZA || g.has_mark(chars::HAMZA_ABOVE) || g.has_mark(chars::HAMZA_BELOW)
}

/// Elongation. Three orthographic forms, in order of checking:
/// an explicit madda mark, a superscript (dagger) alef, or a bare long-vowel
/// letter preceded by its matching short vowel. For the last form the
/// duration depends on what follows: hamza lengthens to four counts, sukun
/// or shadda to six, anything else stays natural.
pub(super) fn madd(window: &Window) -> Option<RuleMatch> {
    let current = window.current();
    if !current.is_letter() {
        return None;
    }

    if current.has_mark(chars::MADDA) {
        return Some(RuleMatch::single().with_duration(MaddDuration::Necessary));
    }
    if current.has_mark(chars::SUPERSCRIPT_ALEF) {
        return Some(RuleMatch::single().with_duration(MaddDuration::Natural));
    }

    if !chars::MADD_LETTERS.contains(&current.base) || !current.is_bare() {
        return None;
    }
    let prev = window.before(1)?;
    if !prev.is_letter() || !prev.has_mark_where(|m| chars::lengthens_into(m, current.base)) {
        return None;
    }

    let duration = match window.after(1) {
        Some(next) if next.is_letter() && carries_hamza(next) => MaddDuration::Connected,
        Some(next)
            if next.is_letter()
                && (next.has_mark(chars::SUKUN) || next.has_mark(chars::SHADDA)) =>
        {
            MaddDuration::Necessary
        }
        _ => MaddDuration::Natural,
    };
    Some(RuleMatch::single().with_duration(duration))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Script;
    use crate::segmenter::segment;

    fn window_at(text: &str, center: usize) -> (Vec<Grapheme>, usize) {
        (segment(text, Script::Uthmani), center)
    }

    fn eval(
        predicate: fn(&Window) -> Option<RuleMatch>,
        text: &str,
        center: usize,
    ) -> Option<RuleMatch> {
        let (graphemes, center) = window_at(text, center);
        predicate(&Window::new(&graphemes, center))
    }

    #[test]
    fn test_idgham_on_noon_sukun_before_yeh() {
        let m = eval(idgham, "نْي", 0).unwrap();
        assert_eq!(m.len, 2);
    }

    #[test]
    fn test_idgham_requires_following_letter() {
        assert!(eval(idgham, "نْ", 0).is_none());
        assert!(eval(idgham, "نْت", 0).is_none()); // teh is ikhfa, not idgham
    }

    #[test]
    fn test_tanween_triggers_family() {
        // dammatan on dal, followed by beh: iqlab
        assert!(eval(iqlab, "دٌب", 0).is_some());
        assert!(eval(idgham, "دٌب", 0).is_none());
    }

    #[test]
    fn test_ikhfa_before_concealment_letter() {
        let m = eval(ikhfa, "نْت", 0).unwrap();
        assert_eq!(m.len, 2);
    }

    #[test]
    fn test_ghunnah_only_on_noon_and_meem() {
        assert!(eval(ghunnah, "نّ", 0).is_some());
        assert!(eval(ghunnah, "مّ", 0).is_some());
        assert!(eval(ghunnah, "بّ", 0).is_none());
    }

    #[test]
    fn test_gemination_on_any_shadda() {
        assert!(eval(gemination, "بّ", 0).is_some());
        assert!(eval(gemination, "نّ", 0).is_some());
        assert!(eval(gemination, "ب", 0).is_none());
    }

    #[test]
    fn test_qalqalah_set_with_sukun() {
        assert!(eval(qalqalah, "قْ", 0).is_some());
        assert!(eval(qalqalah, "بْ", 0).is_some());
        assert!(eval(qalqalah, "سْ", 0).is_none()); // seen does not rebound
        assert!(eval(qalqalah, "ق", 0).is_none()); // needs the sukun
    }

    #[test]
    fn test_madd_from_madda_mark() {
        let m = eval(madd, "آ", 0).unwrap();
        assert_eq!(m.duration, Some(MaddDuration::Necessary));
    }

    #[test]
    fn test_madd_natural_after_fatha() {
        // qaf+fatha, bare alef, lam+fatha
        let m = eval(madd, "قَالَ", 1).unwrap();
        assert_eq!(m.len, 1);
        assert_eq!(m.duration, Some(MaddDuration::Natural));
    }

    #[test]
    fn test_madd_connected_before_hamza() {
        // jeem+fatha, bare alef, hamza: madd muttasil
        let m = eval(madd, "جَاء", 1).unwrap();
        assert_eq!(m.duration, Some(MaddDuration::Connected));
    }

    #[test]
    fn test_madd_necessary_before_shadda() {
        // dad+fatha, bare alef, lam+shadda
        let m = eval(madd, "ضَالّ", 1).unwrap();
        assert_eq!(m.duration, Some(MaddDuration::Necessary));
    }

    #[test]
    fn test_madd_needs_matching_vowel() {
        // damma before alef does not lengthen
        assert!(eval(madd, "قُال", 1).is_none());
    }

    #[test]
    fn test_no_match_on_other_graphemes() {
        assert!(eval(idgham, "a b", 0).is_none());
        assert!(eval(madd, " ", 0).is_none());
    }
}
