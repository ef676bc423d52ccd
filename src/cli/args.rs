//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Interactive QR code generator for URLs, contacts, WiFi and more
#[derive(Parser, Debug)]
#[command(name = "qr-forge")]
#[command(version, about = "Interactive QR code generator", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory for generated images (overrides the config file)
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Do not clear the terminal between screens
    #[arg(long)]
    pub no_clear: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
