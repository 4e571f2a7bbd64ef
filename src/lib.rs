pub mod clean;
pub mod context;
pub mod input;
pub mod lang;
pub mod linguistic;
pub mod preprocessor;
pub mod process;
pub mod profile;
pub mod stage;
pub mod unicode;


pub use context::Context;
pub use input::TextInput;
pub use lang::Lang;
pub use lang::{DEU, ENG, FRA, ITA, NLD, POR, SPA};
pub use linguistic::{Linguistics, Stemmer, StopwordLookup, StopwordSet, Tokenizer};
pub use preprocessor::{PrepError, Preprocessor};
pub use profile::{Profile, ProfileError};
pub use stage::collapse_whitespace::CollapseWhitespace;
pub use stage::fold_ascii::FoldAscii;
pub use stage::fold_line_breaks::FoldLineBreaks;
pub use stage::linguistic::{RemoveStopwords, StemTokens};
pub use stage::lower_case::LowerCase;
pub use stage::remove_punctuation::RemovePunctuation;
pub use stage::remove_special_chars::RemoveSpecialChars;
pub use stage::strip_encoded::StripEncoded;
pub use stage::strip_tags::StripTags;
pub use stage::{Stage, StageError};
