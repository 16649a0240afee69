use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures of `adr init`.
#[derive(Debug, Error)]
pub enum InitError {
  /// The target exists but is a file (or another non-directory entry).
  #[error("{path:?} is not a directory")]
  NotADirectory { path: PathBuf },
  #[error("failed to {action} {}: {source}", .path.display())]
  Filesystem {
    action: &'static str,
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("failed to serialize configuration: {0}")]
  Serialization(#[from] serde_yaml::Error),
}

impl InitError {
  pub(crate) fn filesystem(action: &'static str, path: &Path, source: io::Error) -> Self {
    Self::Filesystem {
      action,
      path: path.to_path_buf(),
      source,
    }
  }
}

/// Failures reading the configuration written by `adr init`.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error(
    "ADRs configuration not found at {}. Run `adr init <directory>` first",
    .path.display()
  )]
  NotFound { path: PathBuf },
  #[error("failed to read {}: {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("failed to parse {}: {source}", .path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },
}

/// An error that should be followed by the usage text of the failing subcommand.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct UsageError {
  message: String,
  usage: String,
}

impl UsageError {
  pub fn new(message: impl Into<String>, usage: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      usage: usage.into(),
    }
  }

  #[must_use]
  pub fn usage(&self) -> &str {
    &self.usage
  }
}
