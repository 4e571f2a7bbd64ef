//! Character classification shared by the stages.

use icu_properties::{CodePointMapData, props::GeneralCategory};

/// True for characters whose Unicode general category is `Sc`.
#[inline]
pub fn is_currency_symbol(c: char) -> bool {
    if c.is_ascii() {
        return c == '$';
    }
    CodePointMapData::<GeneralCategory>::new().get(c) == GeneralCategory::CurrencySymbol
}

/// Letters, digits and underscore.
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Line boundaries: LF, VT, FF, CR, FS, GS, RS, NEL, LS, PS.
#[inline(always)]
pub const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

#[inline(always)]
pub const fn is_ascii_whitespace_fast(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

/// Canonical spacing: only U+0020, never doubled, never at the edges.
pub fn is_canonical_spacing(text: &str) -> bool {
    if text.is_ascii() {
        let bytes = text.as_bytes();
        if bytes.first() == Some(&b' ') || bytes.last() == Some(&b' ') {
            return false;
        }
        let mut prev_space = false;
        for &b in bytes {
            let is_space = b == b' ';
            if (is_space && prev_space) || (!is_space && is_ascii_whitespace_fast(b)) {
                return false;
            }
            prev_space = is_space;
        }
        return true;
    }

    let mut prev_space = true;
    for c in text.chars() {
        if c.is_whitespace() {
            if c != ' ' || prev_space {
                return false;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
    }
    !prev_space || text.is_empty()
}
