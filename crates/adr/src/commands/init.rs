use std::fs::{self, File};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;

use crate::config::{AdrConfig, AdrPaths, AppContext, resolve_directory};
use crate::error::{InitError, UsageError};
use crate::utils::log::t;
use crate::{log_info, log_success, subcommand_help};

pub fn run(ctx: &AppContext, directory: Option<&str>) -> Result<()> {
  let Some(directory) = directory else {
    return Err(UsageError::new(missing_directory_message(), subcommand_help("init")).into());
  };

  let resolved = init(&ctx.paths, directory).map_err(|err| {
    UsageError::new(
      format!("unable to init ADRs directory: {err}"),
      subcommand_help("init"),
    )
  })?;

  log_info!("");
  log_success!(
    "ADRs configuration has been successfully initialized at \"{}\"",
    resolved.display()
  );
  log_info!("");
  Ok(())
}

// Each segment carries its own tint so the underline reset does not drop the red.
fn missing_directory_message() -> String {
  format!(
    "{} {} {}",
    t::err("invalid argument: please specify a"),
    t::err_underline("directory"),
    t::err("as first argument.")
  )
}

/// Ensure the ADR directory exists and record it in the configuration file.
///
/// Returns the resolved directory as written to the configuration. A failure
/// after the directory was created leaves the directory in place.
pub fn init(paths: &AdrPaths, directory: &str) -> Result<PathBuf, InitError> {
  let resolved = resolve_directory(directory);
  ensure_directory(&paths.locate(&resolved), &resolved)?;

  let yaml = AdrConfig::new(&resolved).to_yaml()?;
  write_config(&paths.config_file(), yaml.as_bytes())?;
  Ok(resolved)
}

fn ensure_directory(target: &Path, resolved: &Path) -> Result<(), InitError> {
  match fs::metadata(target) {
    Ok(meta) if !meta.is_dir() => {
      return Err(InitError::NotADirectory {
        path: resolved.to_path_buf(),
      });
    }
    Ok(_) => debug!("{} already exists", target.display()),
    Err(err) if err.kind() == io::ErrorKind::NotFound => {
      debug!("creating {}", target.display());
    }
    Err(source) => return Err(InitError::filesystem("inspect", target, source)),
  }
  fs::create_dir_all(target).map_err(|source| InitError::filesystem("create", target, source))
}

fn write_config(path: &Path, contents: &[u8]) -> Result<(), InitError> {
  debug!("writing {}", path.display());
  let mut file =
    File::create(path).map_err(|source| InitError::filesystem("create", path, source))?;
  file
    .write_all(contents)
    .map_err(|source| InitError::filesystem("write", path, source))
}
