// src/context.rs
// Runtime configuration handed to every stage. Built once, read-only afterwards.

use crate::lang::{DEFAULT_LANG, Lang};
use smallvec::SmallVec;

/// Symbols kept verbatim by ASCII folding when no other set is configured.
pub const DEFAULT_PRESERVED_SYMBOLS: [char; 2] = ['€', '£'];

/// Runtime context passed to every cleaning stage.
///
/// Contains:
/// - `lang`: language tag for the linguistic collaborators and for logging
/// - `preserved`: glyphs that survive ASCII folding and character filtering
///   even when the general-category lookup would not keep them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub lang: Lang,
    preserved: SmallVec<[char; 8]>,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_LANG)
    }
}

impl Context {
    /// Context for `lang` with the default preserved symbols (`€`, `£`).
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            preserved: SmallVec::from_slice(&DEFAULT_PRESERVED_SYMBOLS),
        }
    }

    /// Replace the preserved symbol set. An empty iterator leaves only the
    /// `Sc` general-category rule in effect.
    pub fn with_preserved_symbols(mut self, symbols: impl IntoIterator<Item = char>) -> Self {
        self.preserved.clear();
        for c in symbols {
            self.preserve(c);
        }
        self
    }

    /// Add one symbol to the preserved set.
    pub fn preserve(&mut self, c: char) {
        if !self.preserved.contains(&c) {
            self.preserved.push(c);
        }
    }

    #[inline(always)]
    pub fn is_preserved_symbol(&self, c: char) -> bool {
        self.preserved.contains(&c)
    }

    #[inline]
    pub fn preserved_symbols(&self) -> &[char] {
        &self.preserved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::DEU;

    #[test]
    fn default_preserves_euro_and_pound() {
        let ctx = Context::default();
        assert!(ctx.is_preserved_symbol('€'));
        assert!(ctx.is_preserved_symbol('£'));
        assert!(!ctx.is_preserved_symbol('$'));
        assert_eq!(ctx.lang, DEFAULT_LANG);
    }

    #[test]
    fn replacing_the_set_deduplicates() {
        let ctx = Context::new(DEU).with_preserved_symbols(['¤', '¤', '₿']);
        assert_eq!(ctx.preserved_symbols(), &['¤', '₿']);
        assert!(!ctx.is_preserved_symbol('€'));
    }
}
