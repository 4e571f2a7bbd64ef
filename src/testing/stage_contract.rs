use crate::{context::Context, stage::Stage};

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// Context the contract runs under.
    fn context() -> Context {
        Context::default()
    }

    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must pass through unchanged and without allocation.
    fn should_pass_through() -> &'static [&'static str] {
        &[
            "hello",   // Simple lowercase
            "world",   // Another simple word
            "test123", // Alphanumeric
            "abc def", // Simple phrase with space
            "",        // Empty string
        ]
    }

    /// Input/output pairs that pin down known transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies every universal stage contract.
///
/// 1. `zero_copy_when_no_changes` → clean input comes back borrowed
/// 2. `stage_is_idempotent` → applying twice yields the same result as once
/// 3. `needs_apply_is_sound` → a `false` pre-check never hides a change
/// 4. `output_is_canonical` → single spaces only, nothing at the edges
/// 5. `handles_empty_string` → empty in, empty out
/// 6. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_sound(&$stage);
        $crate::testing::stage_contract::output_is_canonical(&$stage);
        $crate::testing::stage_contract::handles_empty_string(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

use crate::unicode::is_canonical_spacing;
use std::borrow::Cow;

const MIXED_SCRIPTS: &str =
    "Hello 世界 русский Türkçe العربية 简体中文 €5.00 <b>x</b> %41 \\u0041 \r\n\u{1F600}";

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    let ctx = S::context();

    for &input in S::should_pass_through() {
        assert!(
            !stage.needs_apply(input, &ctx).unwrap(),
            "stage `{}` wants to touch pass-through sample `{input}`",
            stage.name()
        );
        let out = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert_eq!(out.as_ref(), input);
        assert!(
            matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
            "zero-copy violated by `{}` on pass-through sample `{input}`",
            stage.name()
        );
    }

    // Second pass over already-cleaned samples must not allocate.
    for &input in S::samples() {
        let once = stage
            .apply(Cow::Borrowed(input), &ctx)
            .unwrap()
            .into_owned();
        let twice = stage.apply(Cow::Borrowed(once.as_str()), &ctx).unwrap();
        assert!(
            matches!(twice, Cow::Borrowed(s) if std::ptr::eq(s, once.as_str())),
            "zero-copy violated by `{}` on second pass over `{input}`",
            stage.name()
        );
    }

    for &(input, expected) in S::should_transform() {
        let out = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert_eq!(
            out.as_ref(),
            expected,
            "`{}` on `{input:?}`",
            stage.name()
        );
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    let ctx = S::context();
    for &input in S::samples() {
        let once = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        let twice = stage.apply(once.clone(), &ctx).unwrap();
        assert_eq!(
            once,
            twice,
            "apply() of `{}` not idempotent on `{input}`",
            stage.name()
        );
    }
}

pub fn needs_apply_is_sound<S: StageTestConfig>(stage: &S) {
    let ctx = S::context();
    let extra = ["", "hello", "world123", " !@#", MIXED_SCRIPTS];
    let inputs = S::samples()
        .iter()
        .chain(S::should_pass_through())
        .chain(S::should_transform().iter().map(|(i, _)| i))
        .chain(extra.iter());

    for &input in inputs {
        let predicted = stage.needs_apply(input, &ctx).expect("needs_apply errored");
        // Owned input so that stages which always allocate are not penalised.
        let output = stage
            .apply(Cow::Owned(input.to_owned()), &ctx)
            .expect("apply errored");
        if !predicted {
            assert_eq!(
                output,
                input,
                "needs_apply() of `{}` answered false but apply() changed `{input}`",
                stage.name()
            );
        }
    }
}

pub fn output_is_canonical<S: StageTestConfig>(stage: &S) {
    let ctx = S::context();
    for &input in S::samples().iter().chain([MIXED_SCRIPTS].iter()) {
        let out = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert!(
            is_canonical_spacing(&out),
            "`{}` left non-canonical spacing in {out:?}",
            stage.name()
        );
    }
}

pub fn handles_empty_string<S: StageTestConfig>(stage: &S) {
    let ctx = S::context();
    let empty: &str = "";
    let result = if stage.needs_apply(empty, &ctx).unwrap() {
        stage.apply(Cow::Borrowed(empty), &ctx).unwrap()
    } else {
        Cow::Borrowed(empty)
    };
    assert_eq!(result.as_ref(), "");
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let ctx = S::context();
    let _ = stage.apply(Cow::Borrowed(MIXED_SCRIPTS), &ctx);
    let _ = stage.apply(Cow::Borrowed("\u{0301}.\u{10FFFF}<\\"), &ctx);
}
