//! # CNet Network Ls Command
//!
//! File: cli/src/commands/network/ls.rs
//!
//! ## Overview
//!
//! This module implements the `cnet network ls` subcommand, which renders a
//! listing of the network definitions known to the runtime. It handles:
//! - Validating the requested presentation mode (`--quiet` / `--format`)
//! - Fetching network records from the configuration store
//! - Normalizing records into a fixed printable shape
//! - Appending the built-in `host` and `none` pseudo-networks
//! - Rendering through one of three output strategies
//!
//! ## Architecture
//!
//! One invocation is a straight line with no branching back:
//!
//! 1. Parse flags (done by Clap before the handler runs).
//! 2. Resolve `(quiet, format)` into exactly one output mode, failing fast
//!    on invalid combinations before any I/O.
//! 3. Load configuration and snapshot the store (`FetchRecords`).
//! 4. Normalize each record into a `PrintableNetwork`.
//! 5. Append the two pseudo-networks, `host` then `none`, always last.
//! 6. Render: quiet (IDs only), tabular (aligned columns), or template
//!    (user-supplied expression per record).
//! 7. Flush the buffering column writer, if one was built. Whether a flush
//!    is needed is known at construction time: the quiet and tabular paths
//!    buffer for alignment, the template path writes directly.
//!
//! ## Examples
//!
//! ```bash
//! # Tabular listing
//! cnet network ls
//!
//! # IDs of tracked networks only
//! cnet network ls -q
//!
//! # Custom per-record template
//! cnet network ls --format '{{ name }}: {{ labels }}'
//!
//! # One JSON object per record
//! cnet network ls --format json
//! ```
//!
use crate::{
    common::{
        format::{self, OutputTemplate},
        netconf::{NetConfStore, NetworkRecord},
        tabwriter::ColumnWriter,
    },
    core::{
        config,
        error::{CnetError, Result},
    },
};
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Tracked identifiers are truncated to this many characters for display.
const ID_DISPLAY_LEN: usize = 12;

/// Names of the always-present virtual entries, in their fixed display order.
const PSEUDO_NETWORK_NAMES: [&str; 2] = ["host", "none"];

/// # Network Ls Arguments (`LsArgs`)
///
/// Defines the command-line arguments accepted by the `cnet network ls`
/// subcommand. The command takes no positional arguments.
#[derive(Parser, Debug)]
#[command(
    about = "List networks",
    long_about = "Lists the network definitions known to the runtime, plus the\n\
                  built-in 'host' and 'none' pseudo-networks."
)]
pub struct LsArgs {
    /// Only display network IDs.
    #[arg(long, short)]
    quiet: bool,
    /// Output format. A per-record template, or a recognized literal value.
    #[arg(long, default_value = "", help = format_flag_help())]
    format: String,
}

/// Help text for `--format`, enumerating the recognized literal values so
/// completion and `--help` stay in sync with one source of truth.
fn format_flag_help() -> String {
    format!(
        "Format the output using the given template (e.g. '{{{{ name }}}}'), or one of: {}",
        format::RECOGNIZED_FORMATS.join(", ")
    )
}

/// The fixed printable shape every listed network is normalized into.
///
/// `file` is internal bookkeeping for the tabular renderer; it is never
/// part of the template-visible projection (see [`NetworkView`]).
#[derive(Debug, Clone, PartialEq, Default)]
struct PrintableNetwork {
    /// Tracked identifier truncated for display; empty for untracked
    /// networks and pseudo-networks.
    id: String,
    /// Network name.
    name: String,
    /// Flattened label rendering; empty when the record carries no labels.
    labels: String,
    /// Originating definition file; empty for pseudo-networks.
    file: String,
}

/// The public projection of a [`PrintableNetwork`] exposed to templates and
/// the json output mode. Deliberately a second type rather than a field
/// annotation, so the internal `file` field cannot leak.
#[derive(Serialize)]
struct NetworkView<'a> {
    id: &'a str,
    name: &'a str,
    labels: &'a str,
}

impl PrintableNetwork {
    fn view(&self) -> NetworkView<'_> {
        NetworkView {
            id: &self.id,
            name: &self.name,
            labels: &self.labels,
        }
    }
}

/// The resolved presentation mode for one invocation.
#[derive(Debug)]
enum OutputMode {
    /// IDs only, one per line; records without an id are skipped.
    Quiet,
    /// Header plus one aligned row per record.
    Table,
    /// User-supplied template evaluated per record.
    Template(OutputTemplate),
}

/// # Handle Network Ls Command (`handle_ls`)
///
/// The main asynchronous handler function for the `cnet network ls` command.
///
/// ## Workflow:
/// 1. Resolve the presentation mode from the flags; `--format raw` and the
///    quiet+template combination fail here, before any store I/O.
/// 2. Load the CNet configuration to obtain the network definition
///    directories (the global-settings resolver).
/// 3. Snapshot the store and normalize every record.
/// 4. Append the `host` and `none` pseudo-networks.
/// 5. Render through the selected output strategy and flush the buffering
///    writer when one was constructed.
///
/// ## Arguments
///
/// * `args`: The parsed `LsArgs` struct containing the `quiet` flag and
///   `format` string.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` on success; an `Err` if flag validation,
///   configuration loading, the store read, template evaluation, or the
///   final write/flush fails. Errors are surfaced once and terminate the
///   invocation; nothing is retried.
pub async fn handle_ls(args: LsArgs) -> Result<()> {
    info!(
        "Handling network ls command (quiet: {}, format: {:?})",
        args.quiet, args.format
    );

    // Validate the presentation flags before touching the store, so bad
    // combinations fail without any I/O.
    let mode = resolve_output_mode(args.quiet, &args.format)?;

    let cfg = config::load_config().context("Failed to load CNet configuration")?;
    let store = NetConfStore::new(cfg.network.conf_dirs.iter().map(PathBuf::from));
    let records = store.list_networks().context("Failed to list networks")?;

    let mut networks: Vec<PrintableNetwork> = records.into_iter().map(normalize).collect();
    append_pseudo_networks(&mut networks);
    debug!("Rendering {} network entr(ies)", networks.len());

    let stdout = io::stdout();
    match mode {
        OutputMode::Quiet => {
            let mut w = ColumnWriter::new(stdout.lock());
            render_quiet(&networks, &mut w);
            w.flush().map_err(CnetError::from)?;
        }
        OutputMode::Table => {
            let mut w = ColumnWriter::new(stdout.lock());
            render_table(&networks, &mut w);
            w.flush().map_err(CnetError::from)?;
        }
        OutputMode::Template(template) => {
            render_template(&networks, &template, &mut stdout.lock())?;
        }
    }

    Ok(())
}

/// Resolves the two presentation controls into exactly one output mode.
///
/// Resolution rules, evaluated in order:
/// 1. `raw` is explicitly disallowed for this listing.
/// 2. The empty/`table`/`wide` formats select the tabular renderer, unless
///    `quiet` degrades the selection to the quiet renderer.
/// 3. Anything else is a custom template. `quiet` conflicts with a custom
///    template (checked before parsing); a syntactically invalid template
///    fails with the parser's diagnostic.
fn resolve_output_mode(quiet: bool, format: &str) -> Result<OutputMode> {
    match format {
        "raw" => Err(CnetError::UnsupportedFormat(format.to_string()).into()),
        "" | "table" | "wide" => Ok(if quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Table
        }),
        _ => {
            if quiet {
                return Err(CnetError::ConflictingOptions.into());
            }
            Ok(OutputMode::Template(OutputTemplate::parse(format)?))
        }
    }
}

/// Converts one raw store record into the printable shape.
///
/// Total over well-formed input: the name and file pass through unchanged,
/// a tracked identifier is truncated to at most [`ID_DISPLAY_LEN`]
/// characters, and an absent identifier or label set renders as empty.
fn normalize(record: NetworkRecord) -> PrintableNetwork {
    let id = record
        .id
        .map(|id| id.chars().take(ID_DISPLAY_LEN).collect())
        .unwrap_or_default();
    let labels = record
        .labels
        .as_ref()
        .map(format::format_labels)
        .unwrap_or_default();
    PrintableNetwork {
        id,
        name: record.name,
        labels,
        file: record.file.display().to_string(),
    }
}

/// Appends the fixed pseudo-network entries, `host` then `none`, after all
/// store-derived entries. Called exactly once per invocation.
fn append_pseudo_networks(networks: &mut Vec<PrintableNetwork>) {
    for name in PSEUDO_NETWORK_NAMES {
        networks.push(PrintableNetwork {
            name: name.to_string(),
            ..Default::default()
        });
    }
}

/// Quiet renderer: one id per line. The only renderer allowed to skip
/// records — entries without a tracked id (pseudo-networks, external
/// networks) produce no output at all.
fn render_quiet<W: Write>(networks: &[PrintableNetwork], w: &mut ColumnWriter<W>) {
    for network in networks.iter().filter(|n| !n.id.is_empty()) {
        w.write_row(&[network.id.as_str()]);
    }
}

/// Tabular renderer: an unconditional header line followed by one row per
/// record. Alignment is deferred to the column writer's flush.
fn render_table<W: Write>(networks: &[PrintableNetwork], w: &mut ColumnWriter<W>) {
    w.write_row(&["NETWORK ID", "NAME", "FILE"]);
    for network in networks {
        w.write_row(&[
            network.id.as_str(),
            network.name.as_str(),
            network.file.as_str(),
        ]);
    }
}

/// Template renderer: evaluates the template against each record's public
/// view and writes the result as a literal line. The first evaluation
/// failure aborts the whole listing rather than skipping the record.
fn render_template<W: Write>(
    networks: &[PrintableNetwork],
    template: &OutputTemplate,
    w: &mut W,
) -> Result<()> {
    for network in networks {
        let line = template.render(&network.view())?;
        // Written verbatim: rendered text never goes back through a
        // formatting macro, so '%' or '{}' in names/labels stay intact.
        w.write_all(line.as_bytes()).map_err(CnetError::from)?;
        w.write_all(b"\n").map_err(CnetError::from)?;
    }
    Ok(())
}
