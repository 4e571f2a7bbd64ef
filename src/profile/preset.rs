use crate::{
    CollapseWhitespace, FoldAscii, FoldLineBreaks, LowerCase, RemovePunctuation,
    RemoveSpecialChars, StripEncoded, StripTags, process::Process, profile::Profile,
};

// Markup and encoded artifacts go first: the character filters would
// otherwise shred them into stray letters.

/// Readable plain text from scraped pages: markup gone, case and currency kept.
pub fn web_text() -> Profile<impl Process> {
    Profile::builder("web_text")
        .add_stage(StripTags)
        .add_stage(StripEncoded)
        .add_stage(FoldLineBreaks)
        .add_stage(RemoveSpecialChars)
        .build()
}

/// Lowercased, punctuation-free text ready for a tokenizer.
pub fn analysis() -> Profile<impl Process> {
    Profile::builder("analysis")
        .add_stage(StripTags)
        .add_stage(StripEncoded)
        .add_stage(FoldLineBreaks)
        .add_stage(RemovePunctuation)
        .add_stage(LowerCase)
        .build()
}

/// ASCII-folded, lowercased keys for lookups and deduplication.
pub fn search_keys() -> Profile<impl Process> {
    Profile::builder("search_keys")
        .add_stage(StripTags)
        .add_stage(StripEncoded)
        .add_stage(FoldLineBreaks)
        .add_stage(FoldAscii)
        .add_stage(RemovePunctuation)
        .add_stage(LowerCase)
        .build()
}

/// Line joining and whitespace cleanup only.
pub fn minimal() -> Profile<impl Process> {
    Profile::builder("minimal")
        .add_stage(FoldLineBreaks)
        .add_stage(CollapseWhitespace)
        .build()
}
