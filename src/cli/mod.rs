//! CLI command handlers for fieldkit.
//!
//! This module provides headless, scriptable access to the money, color, and
//! upload engines, using the persisted configuration for anything not given
//! on the command line.

pub mod color;
pub mod common;
pub mod config;
pub mod money;
pub mod upload;

// Re-export types used by main.rs and tests
pub use color::ColorArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use money::MoneyArgs;
pub use upload::UploadArgs;
