//! # CNet Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for all
//! shared utility modules used throughout the CNet CLI application. It
//! aggregates cross-cutting concerns: the on-disk network configuration
//! store, output formatting helpers, and the column-aligning writer.
//!
//! By centralizing these utilities under the `common::` namespace, CNet
//! keeps command-specific logic (`commands::`) separate from reusable
//! building blocks and from core infrastructure (`core::`).
//!
//! ## Architecture
//!
//! - **`netconf`**: Reads and parses on-disk network definition files,
//!   producing raw network records for the listing commands.
//! - **`format`**: Pure output-formatting helpers: label flattening and the
//!   `--format` template parser/evaluator.
//! - **`tabwriter`**: A buffering, column-aligning line writer used for
//!   tabular output; must be flushed explicitly.
//!
/// Pure formatting helpers: label flattening, output templates.
pub mod format;
/// The on-disk network configuration store (definition files → records).
pub mod netconf;
/// Buffering column-aligned writer for tabular output.
pub mod tabwriter;
