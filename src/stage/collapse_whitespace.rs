use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::is_canonical_spacing,
};
use std::borrow::Cow;

/// Collapse every run of whitespace into one ASCII space and trim the edges.
///
/// Recognizes all Unicode `White_Space=Yes` characters (tab, newline, NBSP,
/// U+2000..U+200A, U+3000, ...). Idempotent, and zero-copy when the input is
/// already canonical.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollapseWhitespace;

impl Stage for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!is_canonical_spacing(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(canonicalize(text))
    }
}

/// Collapse and trim, reusing the allocation of an already-canonical input.
#[inline]
pub(crate) fn canonicalize(text: Cow<'_, str>) -> Cow<'_, str> {
    if is_canonical_spacing(&text) {
        return text;
    }
    Cow::Owned(collapse(&text))
}

/// Collapse and trim into a fresh `String`.
pub(crate) fn collapse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;

#[cfg(test)]
impl StageTestConfig for CollapseWhitespace {
    fn samples() -> &'static [&'static str] {
        &[
            "  hello   world  ",
            "a\t\tb\nc",
            "already clean",
            "\u{00A0}nbsp\u{3000}ideographic\u{2003}em ",
            "",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("  a  b  ", "a b"),
            ("a\r\n\r\nb", "a b"),
            ("\t", ""),
            ("x\u{00A0}\u{00A0}y", "x y"),
        ]
    }
}
