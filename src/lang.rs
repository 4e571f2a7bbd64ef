/// Language tag carried by [`Context`](crate::context::Context).
///
/// The cleaning stages are language-agnostic; the tag only reaches the
/// linguistic collaborators (stopword lookup, stemming) and the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }

    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

pub const ENG: Lang = Lang::new("ENG", "English");
pub const DEU: Lang = Lang::new("DEU", "German");
pub const FRA: Lang = Lang::new("FRA", "French");
pub const SPA: Lang = Lang::new("SPA", "Spanish");
pub const ITA: Lang = Lang::new("ITA", "Italian");
pub const NLD: Lang = Lang::new("NLD", "Dutch");
pub const POR: Lang = Lang::new("POR", "Portuguese");

pub const DEFAULT_LANG: Lang = ENG;

/// Every language with a predefined tag.
pub fn all_langs() -> &'static [Lang] {
    &[ENG, DEU, FRA, SPA, ITA, NLD, POR]
}

/// Look up a predefined tag by its code, case-insensitively.
pub fn lang_by_code(code: &str) -> Option<Lang> {
    all_langs()
        .iter()
        .copied()
        .find(|l| l.code.eq_ignore_ascii_case(code))
}
