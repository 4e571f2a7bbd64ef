//! src/stage/fold_ascii.rs
//!
//! Degrades text to ASCII through NFKD (Compatibility Decomposition), keeping
//! currency symbols verbatim.

use crate::{
    context::Context,
    stage::{Stage, StageError, collapse_whitespace::canonicalize, keep_if_unchanged},
    unicode::{is_canonical_spacing, is_currency_symbol},
};
use icu_normalizer::DecomposingNormalizerBorrowed;
use std::{borrow::Cow, sync::LazyLock};

static ICU4X_NFKD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfkd);

/// Folds text to ASCII while keeping monetary symbols.
///
/// # Algorithm
///
/// 1. Symbols in the context's preserved set are copied verbatim and are
///    never decomposed (`€` and `£` by default).
/// 2. Every other run of text is NFKD-decomposed:
///    - precomposed letters split into base + combining mark: `é` → `e` + `◌́`
///    - compatibility forms expand: `ﬁ` → `fi`, `①` → `1`, `²` → `2`
/// 3. After decomposition a character survives if it is ASCII or has general
///    category `Sc` (`¥`, `₹`, `₿`, ...). Everything else is dropped silently,
///    including the combining marks split off in step 2.
/// 4. Whitespace is collapsed and trimmed.
///
/// Decomposition must precede the ASCII test, otherwise `é` would be dropped
/// as a whole instead of degrading to `e`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FoldAscii;

impl Stage for FoldAscii {
    fn name(&self) -> &'static str {
        "fold_ascii"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!text.is_ascii() || !is_canonical_spacing(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if text.is_ascii() {
            return Ok(canonicalize(text));
        }
        let folded = fold(&text, ctx);
        Ok(canonicalize(keep_if_unchanged(text, folded)))
    }
}

/// Decompose and filter without touching whitespace layout.
pub(crate) fn fold(text: &str, ctx: &Context) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run_start = 0;

    for (i, c) in text.char_indices() {
        if ctx.is_preserved_symbol(c) {
            push_folded(&text[run_start..i], &mut out);
            out.push(c);
            run_start = i + c.len_utf8();
        }
    }
    push_folded(&text[run_start..], &mut out);
    out
}

fn push_folded(run: &str, out: &mut String) {
    if run.is_empty() {
        return;
    }
    if run.is_ascii() {
        out.push_str(run);
        return;
    }
    out.extend(
        ICU4X_NFKD
            .normalize(run)
            .chars()
            .filter(|&c| c.is_ascii() || is_currency_symbol(c)),
    );
}

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;

#[cfg(test)]
impl StageTestConfig for FoldAscii {
    fn samples() -> &'static [&'static str] {
        &[
            "café naïve résumé",
            "ﬁle ①②③ x²",
            "Price: €20 or £15 or ¥300",
            "Hello 世界",
            "El Niño  ",
            "",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("café", "cafe"),
            ("Crème Brûlée", "Creme Brulee"),
            ("ﬁ", "fi"),
            ("€20 £15", "€20 £15"),
            ("日本語 text", "text"),
            ("Straße", "Strae"),
        ]
    }
}
