//! Sources: turn log files or stdin into raw lines for the collection.
//!
//! Input is read whole and decoded lossily, so a stray invalid byte degrades
//! one line instead of aborting the run.

use anyhow::Context;
use logsift_core::config::IngestConfig;
use logsift_core::Collection;
use std::io::Read;
use std::path::PathBuf;

/// Where raw lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
}

impl Source {
    /// One source per path, or stdin when there are none.
    pub fn from_paths(paths: &[PathBuf]) -> Vec<Source> {
        if paths.is_empty() {
            return vec![Source::Stdin];
        }
        paths.iter().cloned().map(Source::File).collect()
    }

    pub fn read_to_string(&self) -> anyhow::Result<String> {
        let bytes = match self {
            Source::File(path) => std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            Source::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .context("failed to read stdin")?;
                buf
            }
        };
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Split `text` into raw lines according to the ingest settings.
pub fn split_lines<'t>(text: &'t str, config: &IngestConfig) -> Vec<&'t str> {
    text.split_terminator('\n')
        .map(|line| {
            if config.trim_line_endings {
                line.strip_suffix('\r').unwrap_or(line)
            } else {
                line
            }
        })
        .filter(|line| !(config.skip_blank_lines && line.trim().is_empty()))
        .collect()
}

/// Read every source in order into `collection`. Returns the number of lines
/// ingested.
pub fn ingest(
    collection: &mut Collection,
    sources: &[Source],
    config: &IngestConfig,
) -> anyhow::Result<usize> {
    let mut ingested = 0;
    for source in sources {
        let text = source.read_to_string()?;
        let lines = split_lines(&text, config);
        tracing::debug!(%source, lines = lines.len(), "ingesting source");
        ingested += lines.len();
        collection.append_all(lines);
    }
    Ok(ingested)
}
