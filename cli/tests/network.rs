//! # CNet CLI Network Integration Tests
//!
//! File: cli/tests/network.rs
//!
//! ## Overview
//!
//! Integration tests for the `cnet network` subcommand group. These run the
//! compiled binary against temporary network-definition directories, pinned
//! via the `CNET_NETCONF_PATH` environment override, and assert on the
//! rendered output for each presentation mode.
//!

// Declare and use the common module
mod common;
use common::*;
// Import necessary items directly
use predicates::prelude::*;
use tempfile::tempdir;

/// A tracked definition: created by the runtime, so it carries `cnetID`
/// and `cnetLabels`.
const BRIDGE_CONFLIST: &str = r#"{
    "cniVersion": "1.0.0",
    "name": "bridge",
    "cnetID": "abcdef123456789",
    "cnetLabels": {"foo": "bar"},
    "plugins": [{"type": "bridge"}]
}"#;

/// An externally defined network: no runtime metadata at all.
const EXTERNAL_CONF: &str = r#"{"cniVersion": "0.4.0", "name": "external", "type": "macvlan"}"#;

/// Empty store, default format: header line plus the two pseudo-networks,
/// with empty id/file columns.
#[test]
fn test_network_ls_empty_store_lists_pseudo_networks() {
    let store = tempdir().unwrap();
    let output = cnet_cmd_with_store(store.path())
        .args(["network", "ls"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("NETWORK ID"));
    assert!(lines[0].contains("NAME"));
    assert!(lines[0].contains("FILE"));
    assert_eq!(lines[1].trim(), "host");
    assert_eq!(lines[2].trim(), "none");
}

/// Tabular listing shows the truncated id, the name, and the source file,
/// followed by the pseudo-networks.
#[test]
fn test_network_ls_table_shows_tracked_network() {
    let store = tempdir().unwrap();
    write_definition(store.path(), "bridge.conflist", BRIDGE_CONFLIST);
    cnet_cmd_with_store(store.path())
        .args(["network", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abcdef123456"))
        .stdout(predicate::str::contains("bridge"))
        .stdout(predicate::str::contains("bridge.conflist"))
        .stdout(predicate::str::contains("host"))
        .stdout(predicate::str::contains("none"));
}

/// The full 15-character id must not appear anywhere in tabular output.
#[test]
fn test_network_ls_table_truncates_id() {
    let store = tempdir().unwrap();
    write_definition(store.path(), "bridge.conflist", BRIDGE_CONFLIST);
    cnet_cmd_with_store(store.path())
        .args(["network", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abcdef123456789").not());
}

/// Quiet mode prints exactly one line: the truncated id of the tracked
/// network. Pseudo-networks have no id and are skipped.
#[test]
fn test_network_ls_quiet_prints_only_tracked_ids() {
    let store = tempdir().unwrap();
    write_definition(store.path(), "bridge.conflist", BRIDGE_CONFLIST);
    cnet_cmd_with_store(store.path())
        .args(["network", "ls", "-q"])
        .assert()
        .success()
        .stdout(predicate::eq("abcdef123456\n"));
}

/// Quiet mode over a store with only untracked entries emits nothing.
#[test]
fn test_network_ls_quiet_empty_for_untracked_networks() {
    let store = tempdir().unwrap();
    write_definition(store.path(), "external.conf", EXTERNAL_CONF);
    cnet_cmd_with_store(store.path())
        .args(["network", "ls", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::eq(""));
}

/// `--format wide` behaves like the plain tabular mode.
#[test]
fn test_network_ls_wide_format_is_tabular() {
    let store = tempdir().unwrap();
    cnet_cmd_with_store(store.path())
        .args(["network", "ls", "--format", "wide"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("NETWORK ID"));
}

/// Custom templates render one line per record, store order first, then
/// `host` and `none`.
#[test]
fn test_network_ls_template_order_preserving() {
    let store = tempdir().unwrap();
    write_definition(store.path(), "a.conflist", r#"{"name": "anet"}"#);
    write_definition(store.path(), "b.conflist", r#"{"name": "bnet"}"#);
    cnet_cmd_with_store(store.path())
        .args(["network", "ls", "--format", "{{ name }}"])
        .assert()
        .success()
        .stdout(predicate::eq("anet\nbnet\nhost\nnone\n"));
}

/// The json format emits one JSON object per record, exposing only the
/// public fields (`id`, `name`, `labels`) and never the source file.
#[test]
fn test_network_ls_json_format() {
    let store = tempdir().unwrap();
    write_definition(store.path(), "bridge.conflist", BRIDGE_CONFLIST);
    let output = cnet_cmd_with_store(store.path())
        .args(["network", "ls", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3); // bridge + host + none

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["id"], "abcdef123456");
    assert_eq!(first["name"], "bridge");
    assert_eq!(first["labels"], "foo=bar");
    for line in &lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 3);
        assert!(value.get("file").is_none());
    }
}

/// `--format raw` is explicitly disallowed, with or without `--quiet`.
#[test]
fn test_network_ls_raw_format_unsupported() {
    let store = tempdir().unwrap();
    cnet_cmd_with_store(store.path())
        .args(["network", "ls", "--format", "raw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format: \"raw\""));
    cnet_cmd_with_store(store.path())
        .args(["network", "ls", "-q", "--format", "raw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format: \"raw\""));
}

/// `--quiet` together with a custom template is a conflict.
#[test]
fn test_network_ls_quiet_conflicts_with_template() {
    let store = tempdir().unwrap();
    cnet_cmd_with_store(store.path())
        .args(["network", "ls", "-q", "--format", "{{ name }}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "format and quiet must not be specified together",
        ));
}

/// A syntactically broken template fails with the parser's diagnostic.
#[test]
fn test_network_ls_invalid_template() {
    let store = tempdir().unwrap();
    cnet_cmd_with_store(store.path())
        .args(["network", "ls", "--format", "{{ unclosed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid format template"));
}

/// An unreadable definition file fails the whole listing.
#[test]
fn test_network_ls_broken_definition_fails() {
    let store = tempdir().unwrap();
    write_definition(store.path(), "broken.conflist", "{ not json");
    cnet_cmd_with_store(store.path())
        .args(["network", "ls"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.conflist"));
}

/// Positional arguments are a usage error for `ls`.
#[test]
fn test_network_ls_rejects_positional_arguments() {
    let store = tempdir().unwrap();
    cnet_cmd_with_store(store.path())
        .args(["network", "ls", "surplus"])
        .assert()
        .failure();
}

/// The docker-style `list` alias resolves to the same command.
#[test]
fn test_network_list_alias() {
    let store = tempdir().unwrap();
    cnet_cmd_with_store(store.path())
        .args(["network", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("NETWORK ID"));
}
