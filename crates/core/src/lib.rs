#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod quiz;
pub mod text;
pub mod time;

pub use error::Error;
pub use time::Clock;
