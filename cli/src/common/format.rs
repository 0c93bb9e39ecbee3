//! # CNet Output Formatting Helpers
//!
//! File: cli/src/common/format.rs
//!
//! ## Overview
//!
//! Pure formatting utilities shared by the listing commands:
//! - `format_labels`: flattens a label map into a deterministic
//!   `key=value,key=value` string.
//! - `OutputTemplate`: the parsed form of a custom `--format` value, either
//!   the built-in JSON view or a user-supplied Tera template evaluated per
//!   record.
//!
//! ## Architecture
//!
//! Template parsing and evaluation are kept apart so the command handler can
//! fail fast on a bad template before any store I/O happens, and map parse
//! and render failures to distinct error kinds (`InvalidTemplate` vs.
//! `TemplateExecution`).
//!
//! Rendered template output is returned as a plain string; callers write it
//! as a literal line. It must never be routed back through a formatting
//! macro, where `%`/`{}` sequences in network names or label values could
//! corrupt the output.
//!
use crate::core::error::{CnetError, Result};
use anyhow::Context;
use serde::Serialize;
use std::collections::HashMap;
use tera::Tera;

/// Literal `--format` values the CLI recognizes alongside custom templates.
/// Surfaced in help text and shell completion.
pub const RECOGNIZED_FORMATS: [&str; 3] = ["json", "table", "wide"];

/// Internal name under which the one-off format template is registered.
const TEMPLATE_NAME: &str = "format";

/// Flattens a label map into `key=value` pairs joined by commas, with keys
/// sorted so the rendering is deterministic regardless of map iteration
/// order. An empty map yields an empty string.
pub fn format_labels(labels: &HashMap<String, String>) -> String {
    let mut pairs: Vec<(&String, &String)> = labels.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<String>>()
        .join(",")
}

/// A parsed custom output format.
#[derive(Debug)]
pub enum OutputTemplate {
    /// The built-in JSON view: one JSON object per record.
    Json,
    /// A user-supplied Tera template evaluated per record.
    Custom(Tera),
}

impl OutputTemplate {
    /// Parses a `--format` value into an executable template.
    ///
    /// The literal `json` (and its legacy spelling `{{json .}}`) selects the
    /// built-in JSON serialization; anything else is compiled as a Tera
    /// template. A syntax error surfaces as `CnetError::InvalidTemplate`.
    pub fn parse(format: &str) -> Result<Self> {
        match format {
            "json" | "{{json .}}" => Ok(Self::Json),
            _ => {
                let mut tera = Tera::default();
                tera.add_raw_template(TEMPLATE_NAME, format)
                    .map_err(|source| CnetError::InvalidTemplate { source })?;
                Ok(Self::Custom(tera))
            }
        }
    }

    /// Evaluates the template against one record view, returning the
    /// rendered text (without a trailing newline).
    ///
    /// Evaluation failures surface as `CnetError::TemplateExecution` and are
    /// expected to abort the caller's whole rendering pass.
    pub fn render<T: Serialize>(&self, view: &T) -> Result<String> {
        match self {
            Self::Json => {
                serde_json::to_string(view).context("Failed to serialize record to JSON")
            }
            Self::Custom(tera) => {
                let context = tera::Context::from_serialize(view)
                    .map_err(|source| CnetError::TemplateExecution { source })?;
                let rendered = tera
                    .render(TEMPLATE_NAME, &context)
                    .map_err(|source| CnetError::TemplateExecution { source })?;
                Ok(rendered)
            }
        }
    }
}
