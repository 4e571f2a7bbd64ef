use crate::{
    context::Context,
    stage::{
        Stage, StageError,
        char_filter::{Candidates, drops_any, filter},
        fold_ascii::fold,
    },
    unicode::is_canonical_spacing,
};
use std::borrow::Cow;

/// Fold to ASCII, then remove special characters.
///
/// Runs the [`FoldAscii`](crate::stage::fold_ascii::FoldAscii) decomposition
/// first and then the context-sensitive filter over the *folded* text.
/// Word characters, whitespace, apostrophes, hyphens and periods are never
/// candidates, so `don't`, `well-known` and `e.g.` survive; currency symbols
/// are kept; a single sentence-final period is stripped, so `Wait...`
/// becomes `Wait..`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveSpecialChars;

impl Stage for RemoveSpecialChars {
    fn name(&self) -> &'static str {
        "remove_special_chars"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(!text.is_ascii()
            || !is_canonical_spacing(text)
            || text.ends_with('.')
            || drops_any(text, Candidates::SpecialCharacters, ctx))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let out = if text.is_ascii() {
            filter(&text, Candidates::SpecialCharacters, ctx)
        } else {
            filter(&fold(&text, ctx), Candidates::SpecialCharacters, ctx)
        };
        Ok(if out == text.as_ref() {
            text
        } else {
            Cow::Owned(out)
        })
    }
}

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;

#[cfg(test)]
impl StageTestConfig for RemoveSpecialChars {
    fn samples() -> &'static [&'static str] {
        &[
            "Café � crème @ 3.50€!",
            "don't stop-believing",
            "Email: test@example.com #hashtag",
            "The end.",
            "naïve résumé ﬁle",
            "Wait... really?!",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &[
            "hello",
            "test123",
            "abc def",
            "don't stop-believing",
            "e.g. 3.5 units",
            "snake_case",
            "",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Café � crème", "Cafe creme"),
            ("Hello, World!", "Hello World"),
            ("The end.", "The end"),
            ("Cost: €20 / £15", "Cost €20 £15"),
            ("email@example.com", "emailexample.com"),
            ("¥300 (approx)", "¥300 approx"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(RemoveSpecialChars);
    }
}
