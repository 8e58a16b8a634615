//! # Configuration Loading
//!
//! Locates and reads the XML tool configuration for `gencred run`. An
//! explicit path wins, `-` reads stdin, and otherwise the file is taken from
//! the per-user config directory.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

/// Config file name inside the gencred config directory
const CONFIG_FILE: &str = "config.xml";

/// Default location of the tool configuration
pub fn default_config_path() -> Result<PathBuf> {
  let proj_dirs = ProjectDirs::from("eddieland", "", "gencred").context("Failed to determine project directories")?;
  Ok(proj_dirs.config_dir().join(CONFIG_FILE))
}

/// Read the XML configuration from `path`, stdin (`-`), or the default path
pub fn read_config_xml(path: Option<&Path>) -> Result<String> {
  match path {
    Some(path) if path == Path::new("-") => {
      let mut xml = String::new();
      io::stdin()
        .read_to_string(&mut xml)
        .context("Failed to read configuration from stdin")?;
      Ok(xml)
    }
    Some(path) => read_file(path),
    None => read_file(&default_config_path()?),
  }
}

fn read_file(path: &Path) -> Result<String> {
  debug!("Reading tool configuration from {}", path.display());
  fs::read_to_string(path).with_context(|| format!("Failed to read configuration file {}", path.display()))
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_read_config_xml_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("tool.xml");
    fs::write(&path, "<Configuration/>").expect("Failed to write config");

    assert_eq!(read_config_xml(Some(&path)).expect("readable"), "<Configuration/>");
  }

  #[test]
  fn test_read_config_xml_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let err = read_config_xml(Some(&temp_dir.path().join("absent.xml"))).unwrap_err();

    assert!(err.to_string().contains("Failed to read configuration file"));
  }

  #[test]
  fn test_default_config_path_ends_with_file_name() {
    if let Ok(path) = default_config_path() {
      assert!(path.ends_with(CONFIG_FILE));
    }
  }
}
