//! # CNet Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the CNet application. It provides a consistent approach to
//! error management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CnetError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the domains the listing pipeline touches:
//! - Configuration loading and validation
//! - Presentation-flag validation (unsupported/conflicting output modes)
//! - Format template parsing and evaluation
//! - Network configuration store reads
//! - Output writing and flushing
//!
//! Every error terminates the invocation; nothing here is retried. The
//! message text is what the user sees on stderr, so each variant carries
//! a complete, self-contained description.
//!
use thiserror::Error;

/// Custom error type for the CNet application.
#[derive(Error, Debug)]
pub enum CnetError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested `--format` value is recognized but explicitly
    /// disallowed for this command (currently only "raw").
    #[error("unsupported format: {0:?}")]
    UnsupportedFormat(String),

    /// `--quiet` combined with a custom `--format` template. The two
    /// presentation controls are mutually exclusive outside of the
    /// plain/table/wide formats.
    #[error("format and quiet must not be specified together")]
    ConflictingOptions,

    /// The `--format` string could not be parsed as a template.
    #[error("invalid format template: {source}")]
    InvalidTemplate { source: tera::Error },

    /// A parsed template failed to evaluate against a record. Aborts the
    /// remaining rendering.
    #[error("failed to render format template: {source}")]
    TemplateExecution { source: tera::Error },

    /// The network configuration store could not be enumerated or a
    /// definition file could not be read/parsed.
    #[error("failed to read network configuration store: {0}")]
    StoreRead(String),

    /// The output sink rejected a write or a final flush.
    #[error("failed to write output: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
