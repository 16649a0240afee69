use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the project-local configuration file, relative to the working directory.
pub const CONFIG_FILE_NAME: &str = ".adrrc.yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdrConfig {
  /// Directory holding the ADR documents, as resolved by `adr init`.
  pub directory: PathBuf,
}

impl AdrConfig {
  pub fn new(directory: impl Into<PathBuf>) -> Self {
    Self {
      directory: directory.into(),
    }
  }

  /// Serialize the configuration to its on-disk YAML form.
  ///
  /// # Errors
  /// Fails when the directory is not valid UTF-8.
  pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(self)
  }

  /// Load the configuration written by `adr init` from the working directory.
  ///
  /// # Errors
  /// Returns [`ConfigError::NotFound`] when the project was never initialized,
  /// or a read/parse error naming the configuration file.
  pub fn load(paths: &AdrPaths) -> Result<Self, ConfigError> {
    let path = paths.config_file();
    let data = match fs::read_to_string(&path) {
      Ok(data) => data,
      Err(err) if err.kind() == io::ErrorKind::NotFound => {
        return Err(ConfigError::NotFound { path });
      }
      Err(source) => return Err(ConfigError::Read { path, source }),
    };
    serde_yaml::from_str(&data).map_err(|source| ConfigError::Parse { path, source })
  }
}

/// Join `input` onto "." and clean it lexically.
///
/// `./docs/adr/` becomes `docs/adr`, `a/../b` becomes `b` and an empty input
/// becomes `.`. The result is always relative to `.`: `/srv/adr` becomes
/// `srv/adr`. Leading `..` are kept.
#[must_use]
pub fn resolve_directory(input: impl AsRef<Path>) -> PathBuf {
  let mut parts: Vec<Component<'_>> = Vec::new();
  for component in input.as_ref().components() {
    match component {
      Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
      Component::ParentDir => match parts.last() {
        Some(Component::Normal(_)) => {
          parts.pop();
        }
        _ => parts.push(component),
      },
      other => parts.push(other),
    }
  }
  if parts.is_empty() {
    return PathBuf::from(".");
  }
  parts.into_iter().collect()
}

#[derive(Debug, Clone)]
pub struct AdrPaths {
  cwd: PathBuf,
}

impl AdrPaths {
  pub fn new(cwd: impl Into<PathBuf>) -> Self {
    Self { cwd: cwd.into() }
  }

  #[must_use]
  pub fn cwd(&self) -> &PathBuf {
    &self.cwd
  }

  #[must_use]
  pub fn config_file(&self) -> PathBuf {
    self.cwd.join(CONFIG_FILE_NAME)
  }

  /// Location of a (possibly relative) directory as seen from the working directory.
  #[must_use]
  pub fn locate(&self, directory: &Path) -> PathBuf {
    self.cwd.join(directory)
  }
}

#[derive(Debug, Clone)]
pub struct AppContext {
  pub paths: AdrPaths,
}

impl AppContext {
  pub fn new(paths: AdrPaths) -> Self {
    Self { paths }
  }
}
