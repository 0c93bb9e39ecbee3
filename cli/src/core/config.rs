//! # CNet Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for CNet, handling loading,
//! validation, and access to configuration data. It resolves the global
//! settings that the command handlers consume, most importantly the list of
//! directories holding on-disk network definitions.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Configuration is loaded from multiple sources in order of precedence
//! - Paths are validated and expanded (e.g., `~` to home directory)
//! - Configuration is validated for correctness before use
//! - Structured data models ensure type safety
//!
//! Configuration sources (in order of precedence):
//! 1. The `CNET_NETCONF_PATH` environment variable (a `:`-separated path list)
//! 2. User-specific `~/.config/cnet/config.toml`
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config()?;
//!
//! // Access the network configuration directories
//! let conf_dirs = &cfg.network.conf_dirs;
//! ```
//!
//! The configuration is loaded once per command execution and passed
//! to the modules that need it.
//!
use crate::core::error::{CnetError, Result};
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{env, fs};
use tracing::debug;

/// Name of the environment variable overriding the network configuration
/// directories. Holds a `:`-separated list of paths. Takes precedence over
/// the configuration file.
pub const NETCONF_PATH_ENV: &str = "CNET_NETCONF_PATH";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    // Add other top-level configuration sections here
}

/// Configuration specific to network inspection (`cnet network ...`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    /// Directories scanned for network definition files (can use ~).
    /// Will be expanded.
    #[serde(default = "default_conf_dirs")]
    pub conf_dirs: Vec<String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            conf_dirs: default_conf_dirs(),
        }
    }
}

fn default_conf_dirs() -> Vec<String> {
    vec!["/etc/cni/net.d".to_string()]
}

const USER_CONFIG_FILENAME: &str = "config.toml";

/// Resolves the effective configuration for this invocation.
///
/// ## Workflow:
/// 1. Load the user configuration file, if one exists.
/// 2. Apply the `CNET_NETCONF_PATH` environment override, if set.
/// 3. Expand `~` and environment variables in all configured paths.
/// 4. Validate the merged result.
///
/// ## Returns
///
/// * `Result<Config>`: The validated configuration, or an `Err` if the file
///   is malformed, a path cannot be expanded, or validation fails.
pub fn load_config() -> Result<Config> {
    let mut config = load_user_config()?.unwrap_or_default();
    apply_env_overrides(&mut config);
    expand_config_paths(&mut config).context("Failed to expand paths in configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// Loads `config.toml` from the platform config directory, if present.
fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("", "", "cnet") else {
        debug!("Could not determine user config directory; using defaults");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join(USER_CONFIG_FILENAME);
    if !config_path.is_file() {
        debug!("No user config file at {}", config_path.display());
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path).with_context(|| {
        format!("Failed to read config file '{}'", config_path.display())
    })?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        CnetError::Config(format!(
            "invalid config file '{}': {}",
            config_path.display(),
            e
        ))
    })?;
    debug!("Loaded user config from {}", config_path.display());
    Ok(Some(config))
}

/// Applies environment-variable overrides on top of the file-based config.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(paths) = env::var(NETCONF_PATH_ENV) {
        if !paths.trim().is_empty() {
            config.network.conf_dirs = paths.split(':').map(str::to_string).collect();
            debug!("{} overrides network.conf_dirs", NETCONF_PATH_ENV);
        }
    }
}

/// Expands `~` and `$VARS` in every configured directory path.
fn expand_config_paths(config: &mut Config) -> Result<()> {
    for dir in &mut config.network.conf_dirs {
        let expanded = shellexpand::full(dir)
            .map_err(|e| CnetError::Config(format!("failed to expand path '{}': {}", dir, e)))?;
        *dir = expanded.into_owned();
    }
    Ok(())
}

/// Sanity checks on the merged configuration.
fn validate_config(config: &Config) -> Result<()> {
    if config.network.conf_dirs.is_empty() {
        return Err(CnetError::Config("network.conf_dirs must not be empty".to_string()).into());
    }
    Ok(())
}
