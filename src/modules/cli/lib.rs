//! lawcases CLI
//!
//! This crate provides the command-line interface for lawcases including:
//! - run: Start the server
//! - validate: Check the configuration (and optionally the store)
//! - docs: Print the OpenAPI document
//! - init: Write a starter configuration

pub mod commands;
pub mod logging;

pub use commands::{Cli, Commands};
