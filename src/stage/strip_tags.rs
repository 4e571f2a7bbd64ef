use crate::{
    context::Context,
    stage::{Stage, StageError, collapse_whitespace::canonicalize},
    unicode::is_canonical_spacing,
};
use memchr::{memchr, memrchr};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Fast pre-scan: a tag needs a `<` with a `>` somewhere after it.
#[inline(always)]
fn may_contain_tag(text: &str) -> bool {
    let bytes = text.as_bytes();
    match (memchr(b'<', bytes), memrchr(b'>', bytes)) {
        (Some(open), Some(close)) => open + 1 < close,
        _ => false,
    }
}

/// Removes markup tags, leaving a space where each tag stood.
///
/// A tag is `<` followed by at least one character up to the next `>`.
/// There is no nesting awareness and no entity decoding:
///
/// - `<b>Hello</b><i>World</i>` → `Hello World` (boundary spaces kept)
/// - `a < b` → unchanged (no closing `>`)
/// - `<>` → unchanged (empty tag)
///
/// Spacing is canonicalized afterwards.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripTags;

impl Stage for StripTags {
    fn name(&self) -> &'static str {
        "strip_tags"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!is_canonical_spacing(text) || (may_contain_tag(text) && TAG_REGEX.is_match(text)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !may_contain_tag(&text) {
            return Ok(canonicalize(text));
        }
        let stripped = match TAG_REGEX.replace_all(&text, " ") {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        Ok(match stripped {
            Some(s) => canonicalize(Cow::Owned(s)),
            None => canonicalize(text),
        })
    }
}

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;

#[cfg(test)]
impl StageTestConfig for StripTags {
    fn samples() -> &'static [&'static str] {
        &[
            "<b>Hello</b><i>World</i>",
            "<p class=\"intro\">Hi <br/> there</p>",
            "1 < 2 and 3 > 2",
            "a <> b",
            "unclosed <tag",
            "<!-- note --> text",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "abc def", "a < b", "b > a", "x <> y", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("<b>Hello</b><i>World</i>", "Hello World"),
            ("<div><p>nested</p></div>", "nested"),
            ("Hello<br>World", "Hello World"),
            ("  <span> x </span>  ", "x"),
            ("1 < 2 and 3 > 2", "1 2"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(StripTags);
    }
}
