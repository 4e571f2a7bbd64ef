#[cfg(test)]
mod integration_tests {

    use crate::profile::preset;
    use crate::testing::collaborators::{PluralStemmer, english_stopwords};
    use crate::{
        Context, DEU, ENG, FoldAscii, FoldLineBreaks, Linguistics, LowerCase, Preprocessor,
        Profile, RemovePunctuation, RemoveSpecialChars, StopwordSet, StripEncoded, StripTags,
    };
    use std::{borrow::Cow, sync::Arc, thread};

    #[test]
    fn scraped_html_to_analysis_tokens() {
        let ling = Linguistics::new(english_stopwords(), PluralStemmer);
        let prep = Preprocessor::builder()
            .lang(ENG)
            .add_stage(StripTags)
            .add_stage(StripEncoded)
            .add_stage(FoldLineBreaks)
            .add_stage(RemovePunctuation)
            .add_stage(LowerCase)
            .add_stage(ling.remove_stopwords_stage())
            .add_stage(ling.stem_stage())
            .build();

        let input = "<h1>The Prices</h1>\r\n<p>Apples cost €2.50 in the %20markets!</p>";
        assert_eq!(prep.normalize(input).unwrap(), "price apple cost €2.50 market");
    }

    #[test]
    fn period_neighbours_are_read_from_folded_text() {
        // `½` folds to `1⁄2` and the fraction slash is dropped, so the period
        // ends up between two ASCII digits.
        let prep = Preprocessor::builder()
            .add_stage(FoldAscii)
            .add_stage(RemovePunctuation)
            .build();
        assert_eq!(prep.normalize("x ½.5").unwrap(), "x 12.5");
        assert_eq!(prep.normalize("x ½. 5").unwrap(), "x 12 5");
    }

    #[test]
    fn preserved_symbols_override_folding() {
        let prep = Preprocessor::builder()
            .preserve_symbols(['™', '€'])
            .add_stage(RemoveSpecialChars)
            .build();
        assert_eq!(prep.normalize("Acme™ costs €5.").unwrap(), "Acme™ costs €5");

        let default = Preprocessor::builder().add_stage(RemoveSpecialChars).build();
        assert_eq!(default.normalize("Acme™ costs €5.").unwrap(), "AcmeTM costs €5");
    }

    #[test]
    fn language_selects_stopwords() {
        let ling = Linguistics::new(
            StopwordSet::new()
                .with_words(ENG, ["the"])
                .with_words(DEU, ["die"]),
            PluralStemmer,
        );
        let de = Preprocessor::builder()
            .lang(DEU)
            .add_stage(ling.remove_stopwords_stage())
            .build();
        assert_eq!(de.normalize("die the").unwrap(), "the");
    }

    #[test]
    fn static_and_dynamic_pipelines_agree() {
        let ctx = Context::default();
        let input = "<em>Ünïcode</em>\n  text, 3.5%!";
        let stat = Profile::builder("static")
            .add_stage(StripTags)
            .add_stage(FoldLineBreaks)
            .add_stage(FoldAscii)
            .add_stage(RemovePunctuation)
            .build();
        let dynamic = Profile::dynamic_builder("dynamic")
            .add_stage(StripTags)
            .add_stage(FoldLineBreaks)
            .add_stage(FoldAscii)
            .add_stage(RemovePunctuation)
            .build();
        let a = stat.run(Cow::Borrowed(input), &ctx).unwrap();
        let b = dynamic.run(Cow::Borrowed(input), &ctx).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "Unicode text 3.5");
    }

    #[test]
    fn preprocessor_is_shareable_across_threads() {
        let prep = Arc::new(
            Preprocessor::builder()
                .add_stage(StripTags)
                .add_stage(LowerCase)
                .build(),
        );
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let prep = Arc::clone(&prep);
                thread::spawn(move || {
                    prep.normalize(format!("<b>WORKER {i}</b>"))
                        .unwrap()
                        .into_owned()
                })
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), format!("worker {i}"));
        }
    }

    #[test]
    fn presets_compose_with_preprocessor_context() {
        let prep = Preprocessor::builder().preserve_symbols(['©']).build();
        let out = prep
            .normalize_with_profile(&preset::web_text(), "© 2024 <b>Acme</b>")
            .unwrap();
        assert_eq!(out, "© 2024 Acme");
    }
}
