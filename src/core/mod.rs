//! Core module - shared configuration and error handling

pub mod config;
pub mod error;

pub use config::{BrowserConfig, CheckConfig, Config, OutputConfig, TargetConfig};
pub use error::{Result, VerishotError};
