pub mod preset;
use crate::{
    context::Context,
    process::{ChainedProcess, DynamicProcess, EmptyProcess, Process},
    stage::{Stage, StageError},
};
use std::borrow::Cow;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Cleaning failed at profile `{0}`: {1}")]
    Failed(&'static str, #[source] StageError),
}

impl ProfileError {
    /// The stage error underneath.
    pub fn stage_error(&self) -> &StageError {
        match self {
            Self::Failed(_, e) => e,
        }
    }
}

/// A named, reusable stage sequence.
pub struct Profile<P: Process> {
    name: &'static str,
    pipeline: P,
}

impl<P: Process> Profile<P> {
    pub fn run<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, ProfileError> {
        trace!(profile = self.name, "running");
        self.pipeline
            .process(text, ctx)
            .map_err(|e| ProfileError::Failed(self.name, e))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.pipeline.stage_names()
    }
}

impl Profile<EmptyProcess> {
    pub fn builder(name: &'static str) -> ProfileBuilder<EmptyProcess> {
        ProfileBuilder::new(name)
    }
}

pub struct ProfileBuilder<P: Process> {
    name: &'static str,
    current: P,
}

impl ProfileBuilder<EmptyProcess> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: EmptyProcess,
        }
    }
}

impl<P: Process> ProfileBuilder<P> {
    pub fn add_stage<S: Stage + 'static>(self, stage: S) -> ProfileBuilder<ChainedProcess<S, P>> {
        ProfileBuilder {
            name: self.name,
            current: ChainedProcess {
                stage,
                previous: self.current,
            },
        }
    }

    pub fn build(self) -> Profile<P> {
        Profile {
            name: self.name,
            pipeline: self.current,
        }
    }
}

impl Profile<DynamicProcess> {
    pub fn dynamic_builder(name: &'static str) -> DynamicProfileBuilder {
        DynamicProfileBuilder {
            name,
            pipeline: DynamicProcess::new(),
        }
    }
}

pub struct DynamicProfileBuilder {
    name: &'static str,
    pipeline: DynamicProcess,
}

impl DynamicProfileBuilder {
    pub fn add_stage<T: Stage + 'static>(self, stage: T) -> Self {
        Self {
            pipeline: self.pipeline.push(stage),
            ..self
        }
    }

    pub fn build(self) -> Profile<DynamicProcess> {
        Profile {
            name: self.name,
            pipeline: self.pipeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        linguistic::{Stemmer, WhitespaceTokenizer},
        stage::{
            fold_line_breaks::FoldLineBreaks, linguistic::StemTokens, lower_case::LowerCase,
            strip_tags::StripTags,
        },
    };
    use std::sync::Arc;

    struct Refusing;
    impl Stemmer for Refusing {
        fn stem<'a>(&self, token: &'a str) -> Cow<'a, str> {
            Cow::Borrowed(token)
        }
    }

    struct AlwaysFails;
    impl Stage for AlwaysFails {
        fn name(&self) -> &'static str {
            "always_fails"
        }
        fn needs_apply(&self, _: &str, _: &Context) -> Result<bool, StageError> {
            Ok(true)
        }
        fn apply<'a>(&self, _: Cow<'a, str>, _: &Context) -> Result<Cow<'a, str>, StageError> {
            Err(StageError::Failed("always_fails", "collaborator unavailable".into()))
        }
    }

    #[test]
    fn static_profile_runs_stages_in_order() {
        let profile = Profile::builder("t")
            .add_stage(FoldLineBreaks)
            .add_stage(StripTags)
            .add_stage(LowerCase)
            .build();
        assert_eq!(profile.name(), "t");
        assert_eq!(
            profile.stage_names(),
            ["fold_line_breaks", "strip_tags", "lower_case"]
        );
        let out = profile
            .run(Cow::Borrowed("<H1>Title</H1>\r\nBody"), &Context::default())
            .unwrap();
        assert_eq!(out, "title body");
    }

    #[test]
    fn dynamic_profile_accepts_collaborator_stages() {
        let stem = StemTokens::new(Arc::new(WhitespaceTokenizer), Arc::new(Refusing));
        let profile = Profile::dynamic_builder("d")
            .add_stage(LowerCase)
            .add_stage(stem)
            .build();
        let out = profile
            .run(Cow::Borrowed("Keep  THIS"), &Context::default())
            .unwrap();
        assert_eq!(out, "keep this");
    }

    #[test]
    fn failures_carry_profile_and_stage() {
        let profile = Profile::builder("broken").add_stage(AlwaysFails).build();
        let err = profile
            .run(Cow::Borrowed("x"), &Context::default())
            .unwrap_err();
        assert!(err.to_string().contains("broken"));
        assert!(matches!(
            err.stage_error(),
            StageError::Failed("always_fails", _)
        ));
    }
}
