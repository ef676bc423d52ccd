//! Command-line interface definitions and helpers.
//!
//! This module contains the CLI argument parsing and the config subcommand handlers.

mod args;
mod commands;

pub use args::{Args, Command, ConfigAction};
pub use commands::{handle_config_action, init_config, show_config};
