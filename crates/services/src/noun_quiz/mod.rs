mod controller;
mod service;

pub use crate::error::NounQuizError;
pub use controller::{ArticleNounController, ConfirmOutcome, NounIntent};
pub use service::NounQuizService;
