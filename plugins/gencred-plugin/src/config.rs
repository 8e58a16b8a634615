//! # Tool Configuration
//!
//! The host passes the tool configuration as an XML fragment such as
//!
//! ```xml
//! <Configuration>
//!   <credential_name>warehouse</credential_name>
//! </Configuration>
//! ```
//!
//! Only the text of the first `credential_name` child of the root element is
//! read, without trimming; any other elements the host adds are ignored.

use quick_xml::Reader;
use quick_xml::events::Event;
use thiserror::Error;

const CREDENTIAL_NAME_TAG: &[u8] = b"credential_name";

/// Errors that fail tool initialization
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Generic Credential name cannot be empty.")]
  MissingCredentialName,

  #[error("Invalid tool configuration: {0}")]
  Malformed(#[from] quick_xml::Error),

  #[error("Invalid tool configuration: element <{0}> is not closed")]
  Unclosed(String),
}

/// Validated tool configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
  credential_name: String,
}

impl PluginConfig {
  pub fn new(credential_name: impl Into<String>) -> Result<Self, ConfigError> {
    let credential_name = credential_name.into();
    if credential_name.trim().is_empty() {
      return Err(ConfigError::MissingCredentialName);
    }

    Ok(Self { credential_name })
  }

  /// Parse the host's XML configuration fragment
  pub fn from_xml(xml: &str) -> Result<Self, ConfigError> {
    Self::new(read_credential_name(xml)?.unwrap_or_default())
  }

  /// Name the credential is stored under in the credential manager, exactly
  /// as configured
  pub fn credential_name(&self) -> &str {
    &self.credential_name
  }
}

/// Text of the root's first `credential_name` child, up to its first nested
/// element
fn read_credential_name(xml: &str) -> Result<Option<String>, ConfigError> {
  let mut reader = Reader::from_str(xml);
  let mut open: Vec<String> = Vec::new();
  let mut name: Option<String> = None;
  let mut capturing = false;

  loop {
    match reader.read_event()? {
      Event::Start(start) => {
        capturing = open.len() == 1 && name.is_none() && start.name().as_ref() == CREDENTIAL_NAME_TAG;
        if capturing {
          name = Some(String::new());
        }
        open.push(String::from_utf8_lossy(start.name().as_ref()).into_owned());
      }
      Event::Empty(empty) => {
        if open.len() == 1 && name.is_none() && empty.name().as_ref() == CREDENTIAL_NAME_TAG {
          name = Some(String::new());
        }
        capturing = false;
      }
      Event::End(_) => {
        open.pop();
        capturing = false;
      }
      Event::Text(text) if capturing => {
        if let Some(name) = name.as_mut() {
          name.push_str(&text.unescape()?);
        }
      }
      Event::CData(data) if capturing => {
        if let Some(name) = name.as_mut() {
          name.push_str(&String::from_utf8_lossy(&data));
        }
      }
      Event::Eof => break,
      _ => {}
    }
  }

  match open.pop() {
    Some(element) => Err(ConfigError::Unclosed(element)),
    None => Ok(name),
  }
}
