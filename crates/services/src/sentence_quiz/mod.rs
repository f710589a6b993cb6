mod controller;
mod progress;
mod service;

pub use crate::error::SentenceQuizError;
pub use controller::{
    AdvanceOutcome, EMPTY_MESSAGE, ERROR_FLASH, LOAD_FAILED_MESSAGE, LoadState, ProgressSync,
    SentenceEffect, SentenceIntent, SentenceOrderController, SyncedProgress,
};
pub use progress::ProgressTracker;
pub use service::SentenceQuizService;
