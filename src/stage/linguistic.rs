//! Stages backed by the external linguistic collaborators.

use crate::{
    context::Context,
    linguistic::{Stemmer, StopwordLookup, Tokenizer},
    stage::{Stage, StageError, collapse_whitespace::collapse, keep_if_unchanged},
    unicode::is_canonical_spacing,
};
use std::{borrow::Cow, sync::Arc};

/// Drops every whitespace-separated word the stopword lookup recognizes for
/// the context language, then rejoins with single spaces.
#[derive(Clone)]
pub struct RemoveStopwords {
    stopwords: Arc<dyn StopwordLookup>,
}

impl RemoveStopwords {
    pub fn new(stopwords: Arc<dyn StopwordLookup>) -> Self {
        Self { stopwords }
    }
}

impl Stage for RemoveStopwords {
    fn name(&self) -> &'static str {
        "remove_stopwords"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(!is_canonical_spacing(text)
            || text
                .split_whitespace()
                .any(|w| self.stopwords.is_stopword(w, ctx.lang)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let mut out = String::with_capacity(text.len());
        for word in text.split_whitespace() {
            if self.stopwords.is_stopword(word, ctx.lang) {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
        Ok(keep_if_unchanged(text, out))
    }
}

/// Tokenizes, stems every token and rejoins with single spaces.
#[derive(Clone)]
pub struct StemTokens {
    tokenizer: Arc<dyn Tokenizer>,
    stemmer: Arc<dyn Stemmer>,
}

impl StemTokens {
    pub fn new(tokenizer: Arc<dyn Tokenizer>, stemmer: Arc<dyn Stemmer>) -> Self {
        Self { tokenizer, stemmer }
    }
}

impl Stage for StemTokens {
    fn name(&self) -> &'static str {
        "stem_tokens"
    }

    /// Stemming outcomes cannot be predicted without running the stemmer.
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!text.is_empty())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let tokens = self.tokenizer.tokenize(&text);
        let mut joined = String::with_capacity(text.len());
        for token in &tokens {
            let stem = self.stemmer.stem(token);
            if stem.is_empty() {
                continue;
            }
            if !joined.is_empty() {
                joined.push(' ');
            }
            joined.push_str(&stem);
        }
        let out = if is_canonical_spacing(&joined) {
            joined
        } else {
            collapse(&joined)
        };
        drop(tokens);
        Ok(keep_if_unchanged(text, out))
    }
}


#[cfg(test)]
mod stem_tokens_contract {
    use super::*;
    use crate::{
        assert_stage_contract,
        linguistic::WhitespaceTokenizer,
        testing::{collaborators::PluralStemmer, stage_contract::StageTestConfig},
    };

    impl StageTestConfig for StemTokens {
        fn samples() -> &'static [&'static str] {
            &["cats and dogs", "Glass Houses", "runs  fast", "stem", ""]
        }

        // `needs_apply` answers true for any non-empty text.
        fn should_pass_through() -> &'static [&'static str] {
            &[""]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("cats and dogs", "cat and dog"),
                ("Glass Houses", "glass house"),
                ("  runs\tfast ", "run fast"),
            ]
        }
    }

    fn stage() -> StemTokens {
        StemTokens::new(Arc::new(WhitespaceTokenizer), Arc::new(PluralStemmer))
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(stage());
    }

    #[test]
    fn already_stemmed_text_is_zero_copy() {
        let input = "cat dog";
        let out = stage()
            .apply(Cow::Borrowed(input), &Context::default())
            .unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn multi_token_stems_are_recollapsed() {
        struct Splitter;
        impl Stemmer for Splitter {
            fn stem<'a>(&self, token: &'a str) -> Cow<'a, str> {
                Cow::Owned(format!(" {token}  x "))
            }
        }
        let stage = StemTokens::new(Arc::new(WhitespaceTokenizer), Arc::new(Splitter));
        let out = stage
            .apply(Cow::Borrowed("a b"), &Context::default())
            .unwrap();
        assert_eq!(out, "a x b x");
    }
}
