use thiserror::Error;
use tracing::debug;

use crate::{
    context::Context,
    input::TextInput,
    lang::{DEFAULT_LANG, Lang},
    process::{DynamicProcess, Process},
    profile::{Profile, ProfileError},
    stage::{Stage, StageError},
};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};

#[derive(Debug, Error)]
pub enum PrepError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}

impl PrepError {
    /// True when the caller handed over something that is not text.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::Stage(e) => e.is_invalid_input(),
            Self::Profile(e) => e.stage_error().is_invalid_input(),
        }
    }
}

/// A configured cleaning pipeline: language, preserved symbols and an
/// ordered stage list built once and reused for every call.
///
/// ```
/// use nlprep::{Preprocessor, RemovePunctuation, StripTags, LowerCase};
///
/// let prep = Preprocessor::builder()
///     .add_stage(StripTags)
///     .add_stage(RemovePunctuation)
///     .add_stage(LowerCase)
///     .build();
/// assert_eq!(prep.normalize("<b>Cost:</b> €20!").unwrap(), "cost €20");
/// ```
pub struct Preprocessor {
    ctx: Context,
    pipeline: DynamicProcess,
}

impl Preprocessor {
    pub fn builder() -> PreprocessorBuilder {
        PreprocessorBuilder::default()
    }

    pub fn normalize<'a>(&self, text: impl Into<Cow<'a, str>>) -> Result<Cow<'a, str>, PrepError> {
        Ok(self.pipeline.process(text.into(), &self.ctx)?)
    }

    /// Validate `input` as text first; `None` and malformed UTF-8 are
    /// rejected with [`StageError::InvalidInput`].
    pub fn normalize_input<T: TextInput + ?Sized>(&self, input: &T) -> Result<String, PrepError> {
        let text = input.as_text()?;
        Ok(self.pipeline.process(text, &self.ctx)?.into_owned())
    }

    pub fn normalize_with_profile<'a, P: Process>(
        &self,
        profile: &Profile<P>,
        text: impl Into<Cow<'a, str>>,
    ) -> Result<Cow<'a, str>, PrepError> {
        Ok(profile.run(text.into(), &self.ctx)?)
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.pipeline.stage_names()
    }
}

pub struct PreprocessorBuilder {
    lang: Lang,
    preserved: Option<SmallVec<[char; 8]>>,
    pipeline: DynamicProcess,
}

impl Default for PreprocessorBuilder {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG,
            preserved: None,
            pipeline: DynamicProcess::new(),
        }
    }
}

impl PreprocessorBuilder {
    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Replace the default preserved set (`€`, `£`).
    pub fn preserve_symbols(mut self, symbols: impl IntoIterator<Item = char>) -> Self {
        self.preserved = Some(symbols.into_iter().collect());
        self
    }

    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.pipeline = self.pipeline.push(stage);
        self
    }

    pub fn add_shared_stage(mut self, stage: Arc<dyn Stage>) -> Self {
        self.pipeline = self.pipeline.push_shared(stage);
        self
    }

    pub fn build(self) -> Preprocessor {
        let mut ctx = Context::new(self.lang);
        if let Some(symbols) = self.preserved {
            ctx = ctx.with_preserved_symbols(symbols);
        }
        debug!(
            lang = %ctx.lang,
            preserved = ?ctx.preserved_symbols(),
            stages = ?self.pipeline.stage_names(),
            "preprocessor built"
        );
        Preprocessor {
            ctx,
            pipeline: self.pipeline,
        }
    }
}
