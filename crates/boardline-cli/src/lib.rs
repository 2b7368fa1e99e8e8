//! Boardline CLI library.
//!
//! Configuration, layout files, the assembly driver and output formatting
//! behind the `boardline` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod driver;
pub mod error;
pub mod layout;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use driver::assemble;
pub use error::{CliError, Result};
pub use output::Formatter;
