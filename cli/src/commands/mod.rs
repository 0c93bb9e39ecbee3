//! # CNet Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates all top-level command groups that comprise the
//! CNet CLI. It serves as the central point for importing and re-exporting
//! command modules to make them accessible to the main application entry
//! point (`main.rs`).
//!
//! ## Architecture
//!
//! The commands follow a hierarchical structure:
//! - Top-level modules represent command groups (e.g., `network`)
//! - Each group contains subcommands in their own modules or files
//! - All group modules are made public for access from `main.rs`
//!
//! ## Command Groups
//!
//! - `network`: Network inspection commands (`ls`)
//!
//! Each command group defines its own arguments structure and handler
//! function to process those arguments and implement the command's
//! functionality.
//!

/// Command group for inspecting container networks. Includes the `ls` subcommand.
pub mod network;

// Note regarding subcommand declarations:
// Subcommands (like `ls` within `network`) are declared within their
// respective parent module's `mod.rs` file, not here at the top level.
