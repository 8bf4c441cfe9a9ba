//! Grapheme segmentation for Arabic script
//!
//! Splits verse text into atomic units of one base letter plus its trailing
//! diacritic stack. Offsets are byte/char positions into the NFC form of the
//! input; when the caller supplies NFC text (the documented input contract)
//! they are positions into the original text verbatim.
//!
//! Precomposed letters such as U+0622 (alef with madda) are canonically
//! decomposed for classification only, so NFC and NFD encodings of the same
//! logical text segment identically.

use std::borrow::Cow;

use smallvec::SmallVec;
use unicode_normalization::char::decompose_canonical;
use unicode_normalization::{is_nfc, UnicodeNormalization};

use crate::api::Script;
use crate::chars;

/// Replacement base for an orphan combining mark.
pub const ORPHAN_BASE: char = '\u{FFFD}';

/// What a grapheme contains, which decides whether any rule can match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphemeKind {
    /// Arabic base letter with zero or more marks
    Letter,
    /// Combining mark with no preceding base letter; matches no rule
    Orphan,
    /// Whitespace, punctuation, or non-Arabic text; matches no rule
    Other,
}

/// One atomic unit of the segmented text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grapheme {
    /// Base letter (or [`ORPHAN_BASE`] for an orphan mark)
    pub base: char,
    /// Attached marks in original order; order decides which rule applies
    pub marks: SmallVec<[char; 4]>,
    /// Byte offset into the analyzed text
    pub offset: usize,
    /// Byte length
    pub len: usize,
    /// Char offset into the analyzed text
    pub char_offset: usize,
    /// Char length
    pub char_len: usize,
    pub kind: GraphemeKind,
}

impl Grapheme {
    /// Byte offset one past the last byte of this grapheme
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Char offset one past the last char of this grapheme
    #[inline]
    pub fn char_end(&self) -> usize {
        self.char_offset + self.char_len
    }

    #[inline]
    pub fn is_letter(&self) -> bool {
        self.kind == GraphemeKind::Letter
    }

    #[inline]
    pub fn has_mark(&self, mark: char) -> bool {
        self.marks.contains(&mark)
    }

    /// True if any attached mark satisfies the predicate
    #[inline]
    pub fn has_mark_where(&self, pred: impl Fn(char) -> bool) -> bool {
        self.marks.iter().copied().any(pred)
    }

    /// Letter with no short vowel, sukun, shadda, or tanween attached
    pub fn is_bare(&self) -> bool {
        !self.has_mark_where(|m| {
            chars::is_short_vowel(m)
                || chars::is_tanween(m)
                || m == chars::SUKUN
                || m == chars::SHADDA
        })
    }
}

/// Normalize input to NFC, borrowing when the text already is NFC.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if is_nfc(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    }
}

/// Split NFC text into graphemes covering every codepoint exactly once.
///
/// Offsets are strictly increasing and contiguous. The function cannot fail:
/// unrecognized input degrades to `Other` or `Orphan` graphemes that match
/// no rule.
pub fn segment(text: &str, script: Script) -> Vec<Grapheme> {
    let mut graphemes: Vec<Grapheme> = Vec::with_capacity(text.chars().count());
    // Index of a letter grapheme still accepting trailing marks
    let mut open: Option<usize> = None;
    let mut char_offset = 0usize;

    for (offset, ch) in text.char_indices() {
        let len = ch.len_utf8();

        // An NFC codepoint may pack a letter and a mark together; classify
        // against its canonical decomposition.
        let mut pieces: SmallVec<[char; 4]> = SmallVec::new();
        decompose_canonical(ch, |d| pieces.push(d));

        let first = pieces[0];
        if chars::is_arabic_letter(first) {
            let mut marks = SmallVec::new();
            marks.extend(pieces.iter().skip(1).copied());
            open = Some(graphemes.len());
            graphemes.push(Grapheme {
                base: first,
                marks,
                offset,
                len,
                char_offset,
                char_len: 1,
                kind: GraphemeKind::Letter,
            });
        } else if chars::is_combining_mark(first, script) {
            match open {
                Some(idx) => {
                    let g = &mut graphemes[idx];
                    g.marks.extend(pieces.iter().copied());
                    g.len += len;
                    g.char_len += 1;
                }
                None => {
                    graphemes.push(Grapheme {
                        base: ORPHAN_BASE,
                        marks: pieces,
                        offset,
                        len,
                        char_offset,
                        char_len: 1,
                        kind: GraphemeKind::Orphan,
                    });
                }
            }
        } else {
            open = None;
            graphemes.push(Grapheme {
                base: ch,
                marks: SmallVec::new(),
                offset,
                len,
                char_offset,
                char_len: 1,
                kind: GraphemeKind::Other,
            });
        }

        char_offset += 1;
    }

    graphemes
}
