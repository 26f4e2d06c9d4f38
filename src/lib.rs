//! verishot - Screenshot-driven UI verification runner
//!
//! Drives a headless Chromium instance through a fixed sequence of navigation
//! steps against a running instance of the orders dashboard, asserting the
//! presence of expected UI elements at each step and persisting a full-page
//! screenshot per verified screen as evidence.
//!
//! # Architecture
//!
//! - **Core**: Configuration and error handling
//! - **Session**: Browser + page lifecycle and accessible-name locators
//! - **Runner**: The fixed login → navigate → assert → capture flow
//!
//! # Usage
//!
//! ```rust,no_run
//! use verishot::{runner, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load();
//!     runner::run(&config).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod runner;
pub mod session;

// Re-export commonly used items
pub use crate::core::{Config, Result, VerishotError};
pub use session::{Locator, Session};
