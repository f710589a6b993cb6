mod controller;
mod service;

pub use crate::error::VerbQuizError;
pub use controller::{VerbConfirm, VerbEffect, VerbIntent, VerbLoad, VerbQuizController};
pub use service::VerbQuizService;
