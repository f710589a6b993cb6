//! Per-question state machines. Pure state, no I/O.

mod noun_round;
mod sentence_round;
mod verb_round;

pub use noun_round::{ArticleMark, GuessOutcome, NounReveal, NounRound, QuizMode};
pub use sentence_round::{
    AUTO_SELECT_HINTS, BankToken, CheckOutcome, FocusTarget, HintOutcome, RoundState,
    SentenceRound,
};
pub use verb_round::{VerbCheck, VerbRound};
