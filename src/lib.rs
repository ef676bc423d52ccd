//! qr-forge library crate.
//!
//! Payload formatting, the interactive menu and the QR rendering seam,
//! exposed for the binary and for integration testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod output_name;
pub mod payload;
pub mod render;
pub mod session;
