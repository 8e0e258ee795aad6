pub mod config;
pub mod error;

pub use crate::config::TrackingConfig;
pub use crate::error::{TrackingError, TrackingResult};
