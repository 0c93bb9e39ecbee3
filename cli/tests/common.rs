//! # CNet CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! This module provides shared utility functions used across the
//! integration test files in `cli/tests/`. Each other `.rs` file in that
//! directory is compiled as a separate test crate linked against the main
//! `cnet` binary crate.
//!

// Allow potentially unused code in this common module, as different test
// files might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// # Get CNet Command (`cnet_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to
/// the compiled `cnet` binary target for the current test run.
///
/// ## Panics
/// Panics if the `cnet` binary cannot be found via `Command::cargo_bin`.
pub fn cnet_cmd() -> Command {
    Command::cargo_bin("cnet").expect("Failed to find cnet binary for testing")
}

/// Creates a `cnet` command whose network configuration store is pinned to
/// `conf_dir` via the `CNET_NETCONF_PATH` environment override.
pub fn cnet_cmd_with_store(conf_dir: &Path) -> Command {
    let mut cmd = cnet_cmd();
    cmd.env("CNET_NETCONF_PATH", conf_dir);
    cmd
}

/// Writes one network definition file into `dir` and returns its path.
pub fn write_definition(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    std::fs::write(&path, content).expect("Failed to write network definition fixture");
    path
}
