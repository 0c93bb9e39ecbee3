//! # CNet Network Command Group
//!
//! File: cli/src/commands/network/mod.rs
//!
//! ## Overview
//!
//! This module serves as the entry point and router for the `cnet network`
//! command group. It defines the available subcommands (currently `ls`)
//! and delegates execution to the appropriate submodule handlers.
//!
//! ## Architecture
//!
//! The module uses Clap's derive macros to define the command structure:
//! - `NetworkArgs`: Top-level arguments struct for the `cnet network` group.
//! - `NetworkCommand`: Enum defining all available network subcommands.
//! - `handle_network`: The main handler function that matches the subcommand
//!   and routes execution to the corresponding handler in the submodules.
//!
//! ## Examples
//!
//! Usage examples:
//!
//! ```bash
//! # List all networks in tabular form
//! cnet network ls
//!
//! # The docker-style alias works too
//! cnet network list
//!
//! # Only print tracked network IDs
//! cnet network ls -q
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Implements the `cnet network ls` command.
mod ls;

/// # Network Command Group Arguments (`NetworkArgs`)
///
/// Represents the top-level command group `cnet network`. Its main purpose
/// is to capture which specific subcommand the user intends to execute.
#[derive(Parser, Debug)]
pub struct NetworkArgs {
    /// The specific network subcommand to execute.
    #[command(subcommand)]
    command: NetworkCommand,
}

/// # Network Subcommands (`NetworkCommand`)
///
/// Enumerates all valid subcommands available under `cnet network`. Each
/// variant holds the arguments struct defined in that subcommand's module.
#[derive(Subcommand, Debug)]
enum NetworkCommand {
    /// Corresponds to `cnet network ls` (alias: `list`).
    /// Lists the networks known to the runtime, including the built-in
    /// `host` and `none` pseudo-networks.
    /// Holds `ls::LsArgs` for the `--quiet` and `--format` options.
    #[command(alias = "list")]
    Ls(ls::LsArgs),
}

/// # Handle Network Command (`handle_network`)
///
/// The entry point function for the `cnet network` command group. It acts
/// as a dispatcher: it matches the parsed subcommand variant and calls the
/// corresponding asynchronous handler, passing along the subcommand's
/// arguments.
///
/// ## Arguments
///
/// * `args`: The parsed `NetworkArgs` struct containing the specific
///   `NetworkCommand` variant and its associated arguments.
///
/// ## Returns
///
/// * `Result<()>`: Propagates the `Result` from the called subcommand handler.
pub async fn handle_network(args: NetworkArgs) -> Result<()> {
    match args.command {
        NetworkCommand::Ls(args) => ls::handle_ls(args).await?,
    }
    Ok(())
}
