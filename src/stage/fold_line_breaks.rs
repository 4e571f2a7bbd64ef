use crate::{
    context::Context,
    stage::{Stage, StageError, collapse_whitespace::canonicalize},
    unicode::{is_canonical_spacing, is_line_break},
};
use memchr::memchr2;
use std::borrow::Cow;

/// Joins lines with single spaces.
///
/// Every line boundary (`\n`, `\r`, `\r\n`, VT, FF, FS, GS, RS, NEL, U+2028,
/// U+2029) becomes a space; runs are then collapsed and edges trimmed, so
/// `"a\r\nb\nc"` becomes `"a b c"` and blank lines disappear.
#[derive(Debug, Default, Clone, Copy)]
pub struct FoldLineBreaks;

#[inline(always)]
fn has_line_break(text: &str) -> bool {
    if text.is_ascii() {
        return memchr2(b'\n', b'\r', text.as_bytes()).is_some()
            || text.bytes().any(|b| matches!(b, 0x0B | 0x0C | 0x1C..=0x1E));
    }
    text.chars().any(is_line_break)
}

impl Stage for FoldLineBreaks {
    fn name(&self) -> &'static str {
        "fold_line_breaks"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(has_line_break(text) || !is_canonical_spacing(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !has_line_break(&text) {
            return Ok(canonicalize(text));
        }
        let joined: String = text
            .chars()
            .map(|c| if is_line_break(c) { ' ' } else { c })
            .collect();
        Ok(canonicalize(Cow::Owned(joined)))
    }
}

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;

#[cfg(test)]
impl StageTestConfig for FoldLineBreaks {
    fn samples() -> &'static [&'static str] {
        &[
            "a\r\nb\nc",
            "line one\n\n\nline two",
            "trailing\r\n",
            "para\u{2029}graph\u{2028}sep",
            "no breaks here",
            "",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("a\r\nb\nc", "a b c"),
            ("\n\nhello\n\n", "hello"),
            ("x\ry", "x y"),
            ("form\u{0C}feed\u{1C}fs", "form feed fs"),
            ("next\u{85}line", "next line"),
        ]
    }
}
