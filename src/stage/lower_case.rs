use crate::{
    context::Context,
    stage::{Stage, StageError, collapse_whitespace::canonicalize},
    unicode::is_canonical_spacing,
};
use std::borrow::Cow;

/// Full Unicode lowercase mapping (`str::to_lowercase`), including the
/// context-dependent final sigma and one-to-many mappings such as
/// `İ` → `i̇`. Spacing is canonicalized.
///
/// Zero-copy when the text is already lowercase and canonical.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerCase;

#[inline(always)]
pub(crate) fn changes_on_lowercase(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    let mut lower = c.to_lowercase();
    lower.next() != Some(c) || lower.next().is_some()
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(text.chars().any(changes_on_lowercase) || !is_canonical_spacing(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !text.chars().any(changes_on_lowercase) {
            return Ok(canonicalize(text));
        }
        let lowered = if text.is_ascii() {
            text.to_ascii_lowercase()
        } else {
            text.to_lowercase()
        };
        Ok(canonicalize(Cow::Owned(lowered)))
    }
}

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;

#[cfg(test)]
impl StageTestConfig for LowerCase {
    fn samples() -> &'static [&'static str] {
        &[
            "HELLO WORLD",
            "Hello World 123",
            "ΟΔΥΣΣΕΥΣ",
            "İSTANBUL",
            "Weiß  Straße",
            "ǅemal",
            "",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("HELLO", "hello"),
            ("ÀÉÎ", "àéî"),
            ("ΟΔΥΣΣΕΥΣ", "οδυσσευς"),
            ("  MiXeD\tCase ", "mixed case"),
        ]
    }
}
