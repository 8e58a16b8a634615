use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// XML configuration fragment naming `credential_name`
pub fn credential_config_xml(credential_name: &str) -> String {
  format!("<Configuration><credential_name>{credential_name}</credential_name></Configuration>")
}

/// RAII guard for a tool configuration file in a temporary directory
///
/// The directory and file are removed when the guard is dropped.
pub struct ConfigFileGuard {
  temp_dir: TempDir,
  path: PathBuf,
}

impl ConfigFileGuard {
  /// Write `content` to `config.xml` in a fresh temporary directory
  pub fn new(content: &str) -> Result<Self> {
    let temp_dir = TempDir::new().context("Failed to create temp directory")?;
    let path = temp_dir.path().join("config.xml");
    fs::write(&path, content).context("Failed to write test configuration")?;

    Ok(Self { temp_dir, path })
  }

  /// Get the path to the configuration file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Get the path to the temporary directory
  pub fn dir(&self) -> &Path {
    self.temp_dir.path()
  }
}
