use crate::{
    context::Context,
    stage::{Stage, StageError, collapse_whitespace::canonicalize},
    unicode::is_canonical_spacing,
};
use memchr::memchr2;
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// Removal passes, most specific first. Each runs over the previous output.
static ENCODED_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r"%[0-9A-Fa-f]{2}",
        r"\\x[0-9A-Fa-f]{2}",
        r"\\u[0-9A-Fa-f]{4}",
        r"\\[0-9A-Fa-f]{1,4}",
    ]
    .map(|p| Regex::new(p).expect("encoded-data pattern is valid"))
});

/// Fast pre-scan: every pattern starts with `%` or `\`.
#[inline(always)]
fn may_contain_encoded(text: &str) -> bool {
    memchr2(b'%', b'\\', text.as_bytes()).is_some()
}

/// Removes encoded-data artifacts left by broken pipelines.
///
/// Passes, in order, each over the previous pass's output:
///
/// | Pass | Pattern      | Example  |
/// |------|--------------|----------|
/// | 1    | `%HH`        | `%20`    |
/// | 2    | `\xHH`       | `\x41`   |
/// | 3    | `\uHHHH`     | `\u00e9` |
/// | 4    | `\H`..`\HHHH`| `\0`, `\1F` |
///
/// Matches are deleted (not replaced by a space), then spacing is
/// canonicalized.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripEncoded;

impl Stage for StripEncoded {
    fn name(&self) -> &'static str {
        "strip_encoded"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!is_canonical_spacing(text)
            || (may_contain_encoded(text) && ENCODED_PATTERNS.iter().any(|re| re.is_match(text))))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !may_contain_encoded(&text) {
            return Ok(canonicalize(text));
        }
        let mut current: Cow<'_, str> = Cow::Borrowed(text.as_ref());
        for re in ENCODED_PATTERNS.iter() {
            let next = match re.replace_all(&current, "") {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            };
            if let Some(s) = next {
                current = Cow::Owned(s);
            }
        }
        let stripped = match current {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
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
impl StageTestConfig for StripEncoded {
    fn samples() -> &'static [&'static str] {
        &[
            "100%20OK\\x41\\u0041",
            "hello%2Cworld",
            "path\\to\\file",
            "50% off",
            "caf\\u00e9 au lait",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "abc def", "50% off", "100%", "a\\z", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("100%20OK\\x41\\u0041", "100OK"),
            ("a%20b", "ab"),
            ("a %20 b", "a b"),
            ("\\xZZ", "\\xZZ"),
            ("tab\\9here", "tabhere"),
            ("\\u12345", "5"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(StripEncoded);
    }
}
