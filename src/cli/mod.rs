//! CLI module for promptvault - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for fetching prompts
//! by explicit slug/project or by dotted path.

pub mod commands;

pub use commands::Cli;
