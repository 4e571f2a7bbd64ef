#[cfg(test)]
mod unit_tests {

    use crate::clean::*;
    use crate::{LowerCase, Preprocessor, StageError, StopwordSet, Linguistics, ENG};
    use crate::testing::collaborators::PluralStemmer;
    use std::borrow::Cow;

    #[test]
    fn decimal_point_survives_punctuation_removal() {
        assert_eq!(
            remove_punctuation("Price is 3.14 dollars").unwrap(),
            "Price is 3.14 dollars"
        );
    }

    #[test]
    fn currency_survives_punctuation_removal() {
        assert_eq!(remove_punctuation("Cost: €20!").unwrap(), "Cost €20");
        assert_eq!(remove_punctuation("$5, ¥300 or £2.").unwrap(), "$5 ¥300 or £2");
    }

    #[test]
    fn sentence_final_period_is_removed() {
        assert_eq!(remove_punctuation("End of sentence.").unwrap(), "End of sentence");
        assert_eq!(remove_punctuation("Version 2.").unwrap(), "Version 2");
        assert_eq!(remove_punctuation(".5 and 5.").unwrap(), "5 and 5");
    }

    #[test]
    fn tags_become_word_boundaries() {
        assert_eq!(remove_tags("<b>Hello</b><i>World</i>").unwrap(), "Hello World");
        assert_eq!(remove_tags("a <> b < c").unwrap(), "a <> b < c");
    }

    #[test]
    fn encoded_sequences_are_dropped() {
        assert_eq!(remove_encoded_data("100%20OK\\x41\\u0041").unwrap(), "100OK");
        assert_eq!(remove_encoded_data("50% off").unwrap(), "50% off");
    }

    #[test]
    fn line_breaks_fold_to_spaces() {
        assert_eq!(remove_line_breaks("a\r\nb\nc").unwrap(), "a b c");
    }

    #[test]
    fn lowercase_is_full_unicode() {
        assert_eq!(to_lowercase("ΑΘΗΝΑ  Straße").unwrap(), "αθηνα straße");
        assert_eq!(to_lowercase("ÀÉÎ").unwrap(), "àéî");
    }

    #[test]
    fn unicode_degrades_to_ascii_but_keeps_money() {
        assert_eq!(normalize_unicode("Café déjà vu").unwrap(), "Cafe deja vu");
        assert_eq!(normalize_unicode("½ price: €9 ₹40").unwrap(), "12 price: €9 ₹40");
        assert_eq!(normalize_unicode("ｆｕｌｌ").unwrap(), "full");
        assert_eq!(normalize_unicode("日本").unwrap(), "");
    }

    #[test]
    fn special_characters_keep_word_shapes() {
        assert_eq!(
            remove_special_characters("it's a well-known fact: #1 @home.").unwrap(),
            "it's a well-known fact 1 home"
        );
        assert_eq!(
            remove_special_characters("snake_case & Co.").unwrap(),
            "snake_case Co"
        );
    }

    #[test]
    fn special_characters_strip_a_single_final_period() {
        assert_eq!(remove_special_characters("Wait...").unwrap(), "Wait..");
        assert_eq!(remove_special_characters("The end. ..").unwrap(), "The end. .");
    }

    #[test]
    fn empty_input_is_empty_output() {
        let ling = Linguistics::new(StopwordSet::new(), PluralStemmer);
        for f in [
            to_lowercase::<str>,
            remove_line_breaks::<str>,
            collapse_whitespace::<str>,
            remove_punctuation::<str>,
            remove_special_characters::<str>,
            normalize_unicode::<str>,
            remove_encoded_data::<str>,
            remove_tags::<str>,
        ] {
            assert_eq!(f("").unwrap(), "");
        }
        assert_eq!(remove_stop_words("", &ling, ENG).unwrap(), "");
        assert_eq!(stem_text("", &ling).unwrap(), "");
    }

    #[test]
    fn every_function_rejects_non_text() {
        let ling = Linguistics::new(StopwordSet::new(), PluralStemmer);
        let none: Option<&str> = None;
        let bad: &[u8] = &[b'a', 0xC3, 0x28];
        let results = [
            to_lowercase(&none),
            remove_line_breaks(&none),
            collapse_whitespace(&none),
            remove_punctuation(&none),
            remove_special_characters(&none),
            normalize_unicode(&none),
            remove_encoded_data(&none),
            remove_tags(&none),
            remove_stop_words(&none, &ling, ENG),
            stem_text(&none, &ling),
            to_lowercase(bad),
            remove_line_breaks(bad),
            collapse_whitespace(bad),
            remove_punctuation(bad),
            remove_special_characters(bad),
            normalize_unicode(bad),
            remove_encoded_data(bad),
            remove_tags(bad),
            remove_stop_words(bad, &ling, ENG),
            stem_text(bad, &ling),
        ];
        for result in results {
            assert!(matches!(result, Err(StageError::InvalidInput(_))));
        }
    }

    #[test]
    fn zero_copy_when_already_lower() {
        let prep = Preprocessor::builder().lang(ENG).add_stage(LowerCase).build();
        let input = "already lower";
        let result = prep.normalize(input).unwrap();
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn ascii_fast_path_allocates_only_on_change() {
        let prep = Preprocessor::builder().lang(ENG).add_stage(LowerCase).build();
        let result = prep.normalize("HELLO WORLD").unwrap();
        assert!(matches!(result, Cow::Owned(_)));
        assert_eq!(result, "hello world");
    }
}
