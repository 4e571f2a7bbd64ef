//! Boundary to the external linguistic collaborators.
//!
//! Tokenization, stopword membership and stemming are *consumed* here, never
//! implemented. Callers build the collaborators once, bundle them in a
//! [`Linguistics`] handle and share it by reference (it is cheap to clone:
//! every collaborator sits behind an `Arc`).
//!
//! Contract for implementors: `is_stopword` and `stem` are pure,
//! side-effect free and case-insensitive.

use crate::{
    lang::Lang,
    stage::{
        linguistic::{RemoveStopwords, StemTokens},
        lower_case::changes_on_lowercase,
    },
};
use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
};

/// Splits text into tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>>;
}

/// Answers stopword membership for a language.
pub trait StopwordLookup: Send + Sync {
    fn is_stopword(&self, word: &str, lang: Lang) -> bool;
}

/// Reduces a token to its stem.
pub trait Stemmer: Send + Sync {
    fn stem<'a>(&self, token: &'a str) -> Cow<'a, str>;
}

/// Splits on Unicode whitespace. The default tokenizer.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>> {
        text.split_whitespace().map(Cow::Borrowed).collect()
    }
}

/// In-memory stopword lists keyed by language.
///
/// Words are stored lowercased; lookups lowercase the probe, so membership
/// is case-insensitive.
#[derive(Debug, Default, Clone)]
pub struct StopwordSet {
    words: HashMap<Lang, HashSet<String>>,
}

impl StopwordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `words` to the list for `lang`.
    pub fn with_words<I, S>(mut self, lang: Lang, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.words.entry(lang).or_default();
        set.extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    pub fn len(&self, lang: Lang) -> usize {
        self.words.get(&lang).map_or(0, HashSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.words.values().all(HashSet::is_empty)
    }
}

impl StopwordLookup for StopwordSet {
    fn is_stopword(&self, word: &str, lang: Lang) -> bool {
        let Some(set) = self.words.get(&lang) else {
            return false;
        };
        if word.chars().any(changes_on_lowercase) {
            set.contains(&word.to_lowercase())
        } else {
            set.contains(word)
        }
    }
}

/// Shared handle to the three collaborators.
#[derive(Clone)]
pub struct Linguistics {
    tokenizer: Arc<dyn Tokenizer>,
    stopwords: Arc<dyn StopwordLookup>,
    stemmer: Arc<dyn Stemmer>,
}

impl fmt::Debug for Linguistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Linguistics").finish_non_exhaustive()
    }
}

impl Linguistics {
    /// Handle with the default [`WhitespaceTokenizer`].
    pub fn new(
        stopwords: impl StopwordLookup + 'static,
        stemmer: impl Stemmer + 'static,
    ) -> Self {
        Self {
            tokenizer: Arc::new(WhitespaceTokenizer),
            stopwords: Arc::new(stopwords),
            stemmer: Arc::new(stemmer),
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Arc::new(tokenizer);
        self
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn stopwords(&self) -> &dyn StopwordLookup {
        self.stopwords.as_ref()
    }

    pub fn stemmer(&self) -> &dyn Stemmer {
        self.stemmer.as_ref()
    }

    /// Stage dropping stopwords of the pipeline's language.
    pub fn remove_stopwords_stage(&self) -> RemoveStopwords {
        RemoveStopwords::new(Arc::clone(&self.stopwords))
    }

    /// Stage tokenizing and stemming every token.
    pub fn stem_stage(&self) -> StemTokens {
        StemTokens::new(Arc::clone(&self.tokenizer), Arc::clone(&self.stemmer))
    }
}
