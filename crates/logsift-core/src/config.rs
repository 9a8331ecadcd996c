//! Configuration types for logsift.
//!
//! [`Config::load`] layers an optional user file on top of the embedded
//! defaults. The user file is either the explicit path passed in, or
//! `$XDG_CONFIG_HOME/logsift/config.toml` (falling back to
//! `~/.config/logsift/config.toml`) when that file exists. Nothing is ever
//! written to disk. [`Config::defaults`] returns the embedded defaults alone.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ingest]
skip_blank_lines  = true
trim_line_endings = true

[query]
default_commands = ["stats"]
echo_commands    = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

/// `[ingest]` section: how the binary turns source files into raw lines.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    /// Blank source lines are not handed to the collection.
    #[serde(default = "default_skip_blank_lines")]
    pub skip_blank_lines: bool,
    /// Strip a trailing `\r` left over from CRLF files.
    #[serde(default = "default_trim_line_endings")]
    pub trim_line_endings: bool,
}

fn default_skip_blank_lines() -> bool { true }
fn default_trim_line_endings() -> bool { true }

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            skip_blank_lines: default_skip_blank_lines(),
            trim_line_endings: default_trim_line_endings(),
        }
    }
}

/// `[query]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    /// Commands run when none are given on the command line.
    #[serde(default = "default_commands")]
    pub default_commands: Vec<String>,
    /// Print `> command` before each command's output.
    #[serde(default = "default_echo_commands")]
    pub echo_commands: bool,
}

fn default_commands() -> Vec<String> { vec!["stats".to_string()] }
fn default_echo_commands() -> bool { true }

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_commands: default_commands(),
            echo_commands: default_echo_commands(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the embedded defaults overlaid with `explicit`, or with the user
    /// config file when no explicit path is given. An explicit path must exist.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        let builder = match explicit {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::from(config_path().as_path()).required(false)),
        };

        builder
            .build()
            .context("failed to read logsift configuration")?
            .try_deserialize()
            .context("invalid logsift configuration")
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("logsift")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
