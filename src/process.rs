//! Process abstraction
//! ChainedProcess is monomorphised – the compiler knows the concrete type of
//! every stage and can inline each `needs_apply`/`apply` pair.
//! DynamicProcess is the dynamic fallback for stage lists built at runtime.
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};
use tracing::trace;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;

    /// Stage names in execution order.
    fn stage_names(&self) -> Vec<&'static str>;
}

#[inline(always)]
fn run_stage<'a, S: Stage + ?Sized>(
    stage: &S,
    text: Cow<'a, str>,
    ctx: &Context,
) -> Result<Cow<'a, str>, StageError> {
    if !stage.needs_apply(&text, ctx)? {
        trace!(stage = stage.name(), "skipped");
        return Ok(text);
    }
    let out = stage.apply(text, ctx)?;
    trace!(
        stage = stage.name(),
        allocated = matches!(out, Cow::Owned(_)),
        len = out.len(),
        "applied"
    );
    Ok(out)
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(text)
    }

    fn stage_names(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let current = self.previous.process(text, ctx)?;
        run_stage(&self.stage, current, ctx)
    }

    fn stage_names(&self) -> Vec<&'static str> {
        let mut names = self.previous.stage_names();
        names.push(self.stage.name());
        names
    }
}

#[derive(Default, Clone)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 12]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    #[inline(always)]
    pub fn push_shared(mut self, stage: Arc<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Process for DynamicProcess {
    #[inline(always)]
    fn process<'a>(
        &self,
        mut text: Cow<'a, str>,
        ctx: &Context,
    ) -> Result<Cow<'a, str>, StageError> {
        for stage in &self.stages {
            text = run_stage(stage.as_ref(), text, ctx)?;
        }
        Ok(text)
    }

    fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}
