mod lookup;
mod noun;
mod progress;
mod sentence;
mod verb;

pub use lookup::{ExamplePair, LookupResult, PonsResponse, Translation, TranslationSet};
pub use noun::{
    Article, ArticleParseError, NO_EXAMPLE_PLACEHOLDER, NO_PLURAL_PLACEHOLDER, NounError,
    NounRecord,
};
pub use progress::{LastDaySummary, ProgressEntry, ProgressHistory, ProgressRecord, day_key};
pub use sentence::{SentenceError, SentenceRecord};
pub use verb::{BLANK, VerbChallenge, VerbError, VerbForms, VerbSentence};
