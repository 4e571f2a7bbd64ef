//! Small deterministic collaborators for tests.

use crate::{
    lang::ENG,
    linguistic::{Stemmer, StopwordSet},
};
use std::borrow::Cow;

/// Lowercases and strips one plural `s` (but not `ss`) from tokens longer
/// than three characters. Idempotent.
#[derive(Debug, Default, Clone, Copy)]
pub struct PluralStemmer;

impl Stemmer for PluralStemmer {
    fn stem<'a>(&self, token: &'a str) -> Cow<'a, str> {
        let lowered: Cow<'a, str> = if token.chars().any(char::is_uppercase) {
            Cow::Owned(token.to_lowercase())
        } else {
            Cow::Borrowed(token)
        };
        let strip = lowered.chars().count() > 3 && lowered.ends_with('s') && !lowered.ends_with("ss");
        if !strip {
            return lowered;
        }
        match lowered {
            Cow::Borrowed(s) => Cow::Borrowed(&s[..s.len() - 1]),
            Cow::Owned(mut s) => {
                s.pop();
                Cow::Owned(s)
            }
        }
    }
}

pub fn english_stopwords() -> StopwordSet {
    StopwordSet::new().with_words(
        ENG,
        [
            "a", "an", "and", "are", "is", "in", "it", "of", "on", "or", "the", "to", "was",
        ],
    )
}
