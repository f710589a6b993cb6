mod lookup;
mod noun_quiz;
mod sentence_quiz;
mod state;
mod verb_quiz;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use lookup::LookupView;
pub use noun_quiz::NounQuizView;
pub use sentence_quiz::SentenceQuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use verb_quiz::VerbQuizView;
