mod lookup_vm;
mod noun_vm;
mod sentence_vm;
mod verb_vm;

pub use lookup_vm::{ExampleVm, LookupVm, map_examples, map_lookup, sanitize_html};
pub use noun_vm::{ArticleButtonVm, NounQuizVm, map_noun_quiz};
pub use sentence_vm::{SentenceQuizVm, TokenVm, map_sentence_quiz};
pub use verb_vm::{ConjugationRowVm, VerbQuizVm, map_verb_quiz};
