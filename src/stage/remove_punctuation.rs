use crate::{
    context::Context,
    stage::{
        Stage, StageError,
        char_filter::{Candidates, drops_any, filter},
        collapse_whitespace::canonicalize,
    },
    unicode::is_canonical_spacing,
};
use std::borrow::Cow;

/// Remove punctuation while keeping the punctuation that carries meaning.
///
/// Every character that is neither alphanumeric nor whitespace is a
/// candidate for removal. Three kinds survive:
///
/// | Kept                         | Example            |
/// |------------------------------|--------------------|
/// | digit-bounded period         | `3.14`, `v2.0.1`   |
/// | currency symbol (`Sc`)       | `$`, `€`, `£`, `¥` |
/// | configured preserved symbol  | see [`Context`]    |
///
/// Output spacing is canonical and a sentence-final period is stripped.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemovePunctuation;

impl Stage for RemovePunctuation {
    fn name(&self) -> &'static str {
        "remove_punctuation"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(!is_canonical_spacing(text) || drops_any(text, Candidates::Punctuation, ctx))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !text.chars().any(|c| Candidates::Punctuation.contains(c)) {
            return Ok(canonicalize(text));
        }
        let out = filter(&text, Candidates::Punctuation, ctx);
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
impl StageTestConfig for RemovePunctuation {
    fn samples() -> &'static [&'static str] {
        &[
            "Price is 3.14 dollars",
            "Cost: €20!",
            "End of sentence.",
            "Hello, world! How's it going?",
            "version 1.2.3 ... or 1..2",
            "snake_case (and) [brackets]",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", "abc def", "pi is 3.14", "$5 or €5", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Price is 3.14 dollars", "Price is 3.14 dollars"),
            ("Cost: €20!", "Cost €20"),
            ("End of sentence.", "End of sentence"),
            ("a . b", "a b"),
            ("1..2", "12"),
            ("it's well-known", "its wellknown"),
            ("¿Qué?", "Qué"),
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        RemovePunctuation
            .apply(Cow::Borrowed(input), &Context::default())
            .unwrap()
            .into_owned()
    }

    #[test]
    fn decimal_point_survives() {
        assert_eq!(run("Price is 3.14 dollars"), "Price is 3.14 dollars");
        assert_eq!(run("It costs $9.99."), "It costs $9.99");
    }

    #[test]
    fn currency_survives() {
        assert_eq!(run("Cost: €20!"), "Cost €20");
        assert_eq!(run("(£5) or [¥500]"), "£5 or ¥500");
    }

    #[test]
    fn preserved_symbols_are_configurable() {
        let ctx = Context::default().with_preserved_symbols(['%']);
        let out = RemovePunctuation
            .apply(Cow::Borrowed("50% off!"), &ctx)
            .unwrap();
        assert_eq!(out, "50% off");
    }

    #[test]
    fn punctuation_only_input_empties() {
        assert_eq!(run("?!...,;:"), "");
    }

    #[test]
    fn tabs_and_runs_are_canonicalized_without_punctuation() {
        assert_eq!(run("  a\t\tb  "), "a b");
    }

    #[test]
    fn clean_text_is_zero_copy() {
        let input = "nothing to do here";
        let out = RemovePunctuation
            .apply(Cow::Borrowed(input), &Context::default())
            .unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }
}
