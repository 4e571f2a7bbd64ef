//! Context-sensitive character filter shared by [`RemovePunctuation`] and
//! [`RemoveSpecialChars`].
//!
//! The filter works in two passes over the text it receives:
//!
//! 1. **classify**: for every character index decide [`Decision::Keep`] or
//!    [`Decision::Drop`], looking only at the read-only neighbours `i - 1` and
//!    `i + 1` of the same buffer;
//! 2. **rebuild**: concatenate the kept characters.
//!
//! Neighbours are resolved on the decoded character sequence of the input,
//! never on the string being rebuilt, so multi-byte and astral characters
//! cannot shift positions. When the filter runs after another stage that
//! changed the text (e.g. [`FoldAscii`]), neighbours refer to that stage's
//! output.
//!
//! [`RemovePunctuation`]: crate::stage::remove_punctuation::RemovePunctuation
//! [`RemoveSpecialChars`]: crate::stage::remove_special_chars::RemoveSpecialChars
//! [`FoldAscii`]: crate::stage::fold_ascii::FoldAscii

use crate::{
    context::Context,
    stage::collapse_whitespace::collapse,
    unicode::{is_currency_symbol, is_word_char},
};
use smallvec::SmallVec;

/// Which characters the filter is allowed to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidates {
    /// Everything that is neither alphanumeric nor whitespace.
    Punctuation,
    /// Everything except word characters, whitespace, `'`, `-` and `.`.
    SpecialCharacters,
}

impl Candidates {
    #[inline(always)]
    pub fn contains(self, c: char) -> bool {
        match self {
            Self::Punctuation => !(c.is_alphanumeric() || c.is_whitespace()),
            Self::SpecialCharacters => {
                !(is_word_char(c) || c.is_whitespace() || matches!(c, '\'' | '-' | '.'))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Keep,
    Drop,
}

/// Decide the fate of `chars[i]`.
#[inline]
pub fn classify(chars: &[char], i: usize, candidates: Candidates, ctx: &Context) -> Decision {
    let c = chars[i];
    if !candidates.contains(c) {
        return Decision::Keep;
    }
    if c == '.' {
        let prev = i.checked_sub(1).and_then(|j| chars.get(j));
        let next = chars.get(i + 1);
        return match (prev, next) {
            (Some(p), Some(n)) if p.is_ascii_digit() && n.is_ascii_digit() => Decision::Keep,
            _ => Decision::Drop,
        };
    }
    if is_currency_symbol(c) || ctx.is_preserved_symbol(c) {
        return Decision::Keep;
    }
    Decision::Drop
}

/// True when the filter would drop at least one character of `text`.
pub fn drops_any(text: &str, candidates: Candidates, ctx: &Context) -> bool {
    if !text.chars().any(|c| candidates.contains(c)) {
        return false;
    }
    let chars: SmallVec<[char; 256]> = text.chars().collect();
    (0..chars.len()).any(|i| classify(&chars, i, candidates, ctx) == Decision::Drop)
}

/// Run both passes, then canonicalize spacing and strip a trailing period.
pub fn filter(text: &str, candidates: Candidates, ctx: &Context) -> String {
    let chars: SmallVec<[char; 256]> = text.chars().collect();

    let decisions: SmallVec<[Decision; 256]> = (0..chars.len())
        .map(|i| classify(&chars, i, candidates, ctx))
        .collect();

    let mut kept = String::with_capacity(text.len());
    for (&c, &d) in chars.iter().zip(decisions.iter()) {
        if d == Decision::Keep {
            kept.push(c);
        }
    }

    let mut out = collapse(&kept);
    strip_trailing_period(&mut out);
    out
}

/// Remove one sentence-final period along with the whitespace it uncovers.
pub(crate) fn strip_trailing_period(text: &mut String) {
    if text.ends_with('.') {
        text.pop();
        let end = text.trim_end().len();
        text.truncate(end);
    }
}
