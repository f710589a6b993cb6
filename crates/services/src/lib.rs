#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod lookup_service;
pub mod noun_quiz;
pub mod sentence_quiz;
pub mod verb_quiz;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use error::{
    AppServicesError, LookupError, NounQuizError, SentenceQuizError, VerbQuizError,
};
pub use lookup_service::LookupService;
pub use noun_quiz::{ArticleNounController, ConfirmOutcome, NounIntent, NounQuizService};
pub use sentence_quiz::{
    AdvanceOutcome, LoadState, ProgressSync, ProgressTracker, SentenceEffect, SentenceIntent,
    SentenceOrderController, SentenceQuizService, SyncedProgress,
};
pub use verb_quiz::{
    VerbConfirm, VerbEffect, VerbIntent, VerbLoad, VerbQuizController, VerbQuizService,
};
