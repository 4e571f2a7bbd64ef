//! Core cleaning stage abstraction.
//!
//! Every stage takes a `Cow<str>` and hands back a `Cow<str>`. A stage that
//! has nothing to do returns its input untouched, so a pipeline over clean
//! text performs no allocation at all.
//!
//! `needs_apply` is the fast pre-check used by pipelines to skip a stage.
//! It must be *sound*: when it answers `false`, `apply` would have returned
//! the input unchanged. It may answer `true` conservatively.
//!
//! Every built-in stage leaves its output whitespace-canonical: no leading or
//! trailing whitespace, no runs, and U+0020 as the only whitespace character.

pub mod char_filter;
pub mod collapse_whitespace;
pub mod fold_ascii;
pub mod fold_line_breaks;
pub mod linguistic;
pub mod lower_case;
pub mod remove_punctuation;
pub mod remove_special_chars;
pub mod strip_encoded;
pub mod strip_tags;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StageError {
    /// The caller handed over something that is not text.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("Cleaning failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

impl StageError {
    #[inline]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// A single cleaning step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used for tracing and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}

impl<S: Stage + ?Sized> Stage for Box<S> {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        (**self).needs_apply(text, ctx)
    }

    #[inline]
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        (**self).apply(text, ctx)
    }
}

/// Return `text` itself when `out` is identical, so callers keep the borrow.
#[inline]
pub(crate) fn keep_if_unchanged<'a>(text: Cow<'a, str>, out: String) -> Cow<'a, str> {
    if out == text.as_ref() {
        text
    } else {
        Cow::Owned(out)
    }
}
