//! One-shot cleaning functions.
//!
//! Each function validates its input as text, runs a single stage under the
//! default [`Context`] and returns an owned `String`. Use a
//! [`Preprocessor`](crate::Preprocessor) or a [`Profile`](crate::profile::Profile)
//! to chain stages without intermediate allocations.

use crate::{
    context::Context,
    input::TextInput,
    lang::Lang,
    linguistic::Linguistics,
    stage::{
        Stage, StageError, collapse_whitespace::CollapseWhitespace, fold_ascii::FoldAscii,
        fold_line_breaks::FoldLineBreaks, lower_case::LowerCase,
        remove_punctuation::RemovePunctuation, remove_special_chars::RemoveSpecialChars,
        strip_encoded::StripEncoded, strip_tags::StripTags,
    },
};

fn run_with<S, T>(stage: &S, input: &T, ctx: &Context) -> Result<String, StageError>
where
    S: Stage + ?Sized,
    T: TextInput + ?Sized,
{
    let text = input.as_text()?;
    if !stage.needs_apply(&text, ctx)? {
        return Ok(text.into_owned());
    }
    Ok(stage.apply(text, ctx)?.into_owned())
}

fn run<S: Stage, T: TextInput + ?Sized>(stage: S, input: &T) -> Result<String, StageError> {
    run_with(&stage, input, &Context::default())
}

/// Full Unicode lowercase, whitespace canonical.
pub fn to_lowercase<T: TextInput + ?Sized>(input: &T) -> Result<String, StageError> {
    run(LowerCase, input)
}

/// Every line boundary becomes a single space.
pub fn remove_line_breaks<T: TextInput + ?Sized>(input: &T) -> Result<String, StageError> {
    run(FoldLineBreaks, input)
}

pub fn collapse_whitespace<T: TextInput + ?Sized>(input: &T) -> Result<String, StageError> {
    run(CollapseWhitespace, input)
}

/// Drops punctuation, keeping decimal points between digits and currency
/// symbols. Trailing periods go too.
///
/// ```
/// assert_eq!(nlprep::clean::remove_punctuation("Cost: €20!").unwrap(), "Cost €20");
/// ```
pub fn remove_punctuation<T: TextInput + ?Sized>(input: &T) -> Result<String, StageError> {
    run(RemovePunctuation, input)
}

/// ASCII-folds, then drops everything that is not a word character,
/// whitespace, `'`, `-`, `.` or a currency symbol.
pub fn remove_special_characters<T: TextInput + ?Sized>(input: &T) -> Result<String, StageError> {
    run(RemoveSpecialChars, input)
}

/// NFKD, then ASCII degradation that keeps currency symbols.
pub fn normalize_unicode<T: TextInput + ?Sized>(input: &T) -> Result<String, StageError> {
    run(FoldAscii, input)
}

/// Strips `%HH`, `\xHH`, `\uHHHH` and `\` + 1–4 hex digit sequences.
pub fn remove_encoded_data<T: TextInput + ?Sized>(input: &T) -> Result<String, StageError> {
    run(StripEncoded, input)
}

/// Replaces every `<...>` tag with a space.
pub fn remove_tags<T: TextInput + ?Sized>(input: &T) -> Result<String, StageError> {
    run(StripTags, input)
}

/// Drops the words `linguistics` knows as stopwords of `lang`.
pub fn remove_stop_words<T: TextInput + ?Sized>(
    input: &T,
    linguistics: &Linguistics,
    lang: Lang,
) -> Result<String, StageError> {
    run_with(&linguistics.remove_stopwords_stage(), input, &Context::new(lang))
}

/// Tokenizes and stems with the collaborators in `linguistics`.
pub fn stem_text<T: TextInput + ?Sized>(
    input: &T,
    linguistics: &Linguistics,
) -> Result<String, StageError> {
    run_with(&linguistics.stem_stage(), input, &Context::default())
}
