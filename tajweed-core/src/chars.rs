//! Arabic codepoint classification tables
//!
//! All rule predicates are expressed over these tables; membership checks are
//! allocation-free and O(1) or O(set len) for the small fixed sets.

use crate::api::Script;

// Letters referenced by the rule tables.
pub const HAMZA: char = '\u{0621}';
pub const ALEF: char = '\u{0627}';
pub const BEH: char = '\u{0628}';
pub const TEH: char = '\u{062A}';
pub const THEH: char = '\u{062B}';
pub const JEEM: char = '\u{062C}';
pub const DAL: char = '\u{062F}';
pub const THAL: char = '\u{0630}';
pub const REH: char = '\u{0631}';
pub const ZAIN: char = '\u{0632}';
pub const SEEN: char = '\u{0633}';
pub const SHEEN: char = '\u{0634}';
pub const SAD: char = '\u{0635}';
pub const DAD: char = '\u{0636}';
pub const TAH: char = '\u{0637}';
pub const ZAH: char = '\u{0638}';
pub const FEH: char = '\u{0641}';
pub const QAF: char = '\u{0642}';
pub const KAF: char = '\u{0643}';
pub const LAM: char = '\u{0644}';
pub const MEEM: char = '\u{0645}';
pub const NOON: char = '\u{0646}';
pub const WAW: char = '\u{0648}';
pub const ALEF_MAKSURA: char = '\u{0649}';
pub const YEH: char = '\u{064A}';

// Diacritic marks.
pub const FATHATAN: char = '\u{064B}';
pub const DAMMATAN: char = '\u{064C}';
pub const KASRATAN: char = '\u{064D}';
pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const SHADDA: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';
pub const MADDA: char = '\u{0653}';
pub const HAMZA_ABOVE: char = '\u{0654}';
pub const HAMZA_BELOW: char = '\u{0655}';
pub const SUPERSCRIPT_ALEF: char = '\u{0670}';

/// Letters that assimilate a preceding nasalized ending (idgham, يرملون).
pub const IDGHAM_SET: &[char] = &[YEH, REH, MEEM, LAM, WAW, NOON];

/// The single letter that converts a preceding nasalized ending (iqlab).
pub const IQLAB_SET: &[char] = &[BEH];

/// Letters that conceal a preceding nasalized ending (ikhfa).
pub const IKHFA_SET: &[char] = &[
    TEH, THEH, JEEM, DAL, THAL, ZAIN, SEEN, SHEEN, SAD, DAD, TAH, ZAH, FEH, QAF, KAF,
];

/// Letters that rebound when carrying sukun (qalqalah, قطب جد).
pub const QALQALAH_SET: &[char] = &[QAF, TAH, BEH, JEEM, DAL];

/// Letters that can carry a prolonged vowel sound (madd).
pub const MADD_LETTERS: &[char] = &[ALEF, ALEF_MAKSURA, WAW, YEH];

/// Arabic base letter, including alef wasla used in Uthmani orthography.
#[inline]
pub fn is_arabic_letter(ch: char) -> bool {
    matches!(ch, '\u{0621}'..='\u{063A}' | '\u{0641}'..='\u{064A}' | '\u{0671}')
}

/// Combining diacritic relative to the selected script variant.
///
/// The Uthmani table additionally absorbs the Qur'anic annotation marks
/// (small high letters, recitation signs) so they stay attached to their
/// carrier letter instead of splitting graphemes.
#[inline]
pub fn is_combining_mark(ch: char, script: Script) -> bool {
    if matches!(ch, '\u{064B}'..='\u{065F}' | SUPERSCRIPT_ALEF) {
        return true;
    }
    match script {
        Script::Uthmani => matches!(
            ch,
            '\u{06D6}'..='\u{06DC}'
                | '\u{06DF}'..='\u{06E4}'
                | '\u{06E7}'..='\u{06E8}'
                | '\u{06EA}'..='\u{06ED}'
        ),
        Script::Simple => false,
    }
}

/// Tanween mark (doubled case ending, inherently nasalized).
#[inline]
pub fn is_tanween(ch: char) -> bool {
    matches!(ch, FATHATAN | DAMMATAN | KASRATAN)
}

/// Mark that triggers the nasalization rule family (sukun or tanween).
#[inline]
pub fn is_nasalization_mark(ch: char) -> bool {
    ch == SUKUN || is_tanween(ch)
}

/// Short vowel mark whose presence makes a madd letter non-bare.
#[inline]
pub fn is_short_vowel(ch: char) -> bool {
    matches!(ch, FATHA | DAMMA | KASRA)
}

/// Short vowel that lengthens into the given madd letter.
#[inline]
pub fn lengthens_into(vowel: char, madd_letter: char) -> bool {
    match madd_letter {
        ALEF | ALEF_MAKSURA => vowel == FATHA,
        WAW => vowel == DAMMA,
        YEH => vowel == KASRA,
        _ => false,
    }
}
