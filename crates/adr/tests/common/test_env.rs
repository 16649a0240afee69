use anyhow::{Context, Result};
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};

pub const CONFIG_FILE: &str = ".adrrc.yml";

#[derive(Debug)]
pub struct TestEnv {
  temp: TempDir,
}

impl TestEnv {
  pub fn run<F, R>(f: F) -> R
  where
    F: FnOnce(&TestEnv) -> R,
  {
    let env = TestEnv::new();
    f(&env)
  }

  pub fn new() -> Self {
    let temp = Builder::new()
      .prefix("adr-test-")
      .tempdir_in(tmp_root())
      .expect("temp dir");
    Self { temp }
  }

  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  pub fn config_path(&self) -> PathBuf {
    self.path().join(CONFIG_FILE)
  }

  pub fn read_config(&self) -> Result<String> {
    let path = self.config_path();
    std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
  }

  /// Number of entries directly inside the sandbox.
  pub fn entry_count(&self) -> Result<usize> {
    Ok(std::fs::read_dir(self.path())?.count())
  }

  pub fn adr(&self) -> Result<Command> {
    let mut cmd = Command::cargo_bin("adr")?;
    cmd.current_dir(self.path());
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
  }

  pub fn write_file(&self, relative: &str, body: &str) -> Result<PathBuf> {
    let path = self.path().join(relative);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).map_err(|err| {
        anyhow::anyhow!(
          "create parent dir for file under {}: {err}",
          self.path().display()
        )
      })?;
    }
    std::fs::write(&path, body).map_err(|err| {
      anyhow::anyhow!(
        "write file body at {} relative to {}: {err}",
        path.display(),
        self.path().display()
      )
    })?;
    Ok(path)
  }
}

/// Returns a workspace-local temp root for tests under `./target/test-tmp` at the workspace root.
/// Ensures the directory exists to satisfy sandboxed filesystems that forbid `/tmp`.
pub fn tmp_root() -> PathBuf {
  let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  // Walk two parents up: crates/adr -> crates -> workspace root
  let workspace_root = manifest_dir
    .parent()
    .and_then(|p| p.parent())
    .unwrap_or(&manifest_dir)
    .to_path_buf();
  let root = workspace_root.join("target").join("test-tmp");
  let _ = std::fs::create_dir_all(&root);
  root
}
