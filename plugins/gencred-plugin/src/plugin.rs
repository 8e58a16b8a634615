//! # Credentials Tool
//!
//! Lifecycle of the tool as driven by the pipeline host: `init` with the XML
//! configuration, `push_all_records` once, then `close`. The tool has no
//! inputs and a single `Output` anchor carrying one record.

use gencred_core::{Credential, CredentialStore, Lookup, lookup};
use tracing::{debug, info, warn};

use crate::config::PluginConfig;
use crate::host::{Engine, HostError, MessageType, OutputAnchor, OutputAnchorManager};
use crate::record::{FieldType, Record, RecordCreator, RecordInfo};

/// Name of the tool's only output anchor
pub const OUTPUT_ANCHOR: &str = "Output";

/// Output field holding the credential's account name
pub const USERNAME_FIELD: &str = "Username";

/// Output field holding the decoded secret
pub const PASSWORD_FIELD: &str = "Password";

/// Width of both output fields
pub const FIELD_WIDTH: usize = 100;

const USERNAME_INDEX: usize = 0;
const PASSWORD_INDEX: usize = 1;

/// Record layout published on the `Output` anchor
pub fn build_record_info_out() -> RecordInfo {
  let mut record_info = RecordInfo::new();
  record_info.add_field(USERNAME_FIELD, FieldType::String, FIELD_WIDTH);
  record_info.add_field(PASSWORD_FIELD, FieldType::String, FIELD_WIDTH);
  record_info
}

/// Pipeline tool that publishes one generic credential
pub struct CredentialsPlugin<E, M: OutputAnchorManager, S> {
  tool_id: i32,
  engine: E,
  anchor_manager: M,
  store: S,
  record_info: RecordInfo,
  output_anchor: Option<M::Anchor>,
  config: Option<PluginConfig>,
}

impl<E, M, S> CredentialsPlugin<E, M, S>
where
  E: Engine,
  M: OutputAnchorManager,
  S: CredentialStore,
{
  pub fn new(tool_id: i32, engine: E, anchor_manager: M, store: S) -> Self {
    Self {
      tool_id,
      engine,
      anchor_manager,
      store,
      record_info: build_record_info_out(),
      output_anchor: None,
      config: None,
    }
  }

  /// Initialize the tool from its XML configuration
  ///
  /// Returns `false` after reporting a single error message when the
  /// configuration is unusable.
  pub fn init(&mut self, xml: &str) -> bool {
    self.output_anchor = self.anchor_manager.get_output_anchor(OUTPUT_ANCHOR);
    if self.output_anchor.is_none() {
      self.display_error(&HostError::AnchorUnavailable(OUTPUT_ANCHOR.to_string()).to_string());
      return false;
    }

    match PluginConfig::from_xml(xml) {
      Ok(config) => {
        info!(tool_id = self.tool_id, credential_name = config.credential_name(), "Tool initialized");
        self.config = Some(config);
        true
      }
      Err(err) => {
        self.display_error(&err.to_string());
        false
      }
    }
  }

  /// The tool takes no input; incoming connections get an interface that
  /// accepts nothing.
  pub fn add_incoming_connection(&mut self, connection_type: &str, connection_name: &str) -> IncomingInterface {
    debug!(connection_type, connection_name, "Ignoring incoming connection");
    IncomingInterface
  }

  pub fn add_outgoing_connection(&mut self, connection_name: &str) -> bool {
    debug!(connection_name, "Outgoing connection added");
    true
  }

  /// Look up the configured credential and push the single output record
  ///
  /// A `record_limit` of 0 means the host only wants the layout, so no lookup
  /// happens and no record is pushed. Returns `false` if called before a
  /// successful [`CredentialsPlugin::init`], if the credential does not fit
  /// the layout, or if the anchor rejects the record. The anchor is closed
  /// whenever it was reached.
  pub fn push_all_records(&mut self, record_limit: i64) -> bool {
    let Some(name) = self.config.as_ref().map(|config| config.credential_name().to_string()) else {
      warn!(tool_id = self.tool_id, "push_all_records called before a successful init");
      return false;
    };

    let record_info = self.record_info.clone();
    let mut record_creator = record_info.construct_record_creator();
    let mut filled = true;

    let outcome = if record_limit == 0 {
      debug!(tool_id = self.tool_id, "Record limit is 0, publishing layout only");
      None
    } else {
      Some(lookup(&self.store, &name))
    };

    if let Some(result) = &outcome {
      match result {
        Lookup::Found(credential) => {
          match fill_credential(&mut record_creator, credential) {
            Ok(()) => self.display_info(&format!("Retrieved credential for {name}")),
            Err(err) => {
              record_creator.reset();
              self.display_error(&err.to_string());
              filled = false;
            }
          }
        }
        Lookup::Absent => {
          self.display_error(&format!(
            "Generic credential {name} does not exist or cannot be retrieved"
          ));
        }
      }
    }

    match self.publish(&record_info, &mut record_creator, outcome.is_some()) {
      Ok(()) => filled,
      Err(err) => {
        self.display_error(&err.to_string());
        false
      }
    }
  }

  /// Called by the host once the pipeline has finished with the tool
  ///
  /// The anchor is only checked when `init` succeeded; a tool that never ran
  /// has nothing left open.
  pub fn close(&mut self, has_errors: bool) {
    debug!(tool_id = self.tool_id, has_errors, "Closing tool");
    if self.config.is_none() {
      return;
    }
    if let Some(anchor) = &self.output_anchor
      && let Err(err) = anchor.assert_close()
    {
      self.display_error(&err.to_string());
    }
  }

  pub fn anchor_manager(&self) -> &M {
    &self.anchor_manager
  }

  pub fn config(&self) -> Option<&PluginConfig> {
    self.config.as_ref()
  }

  fn publish(
    &mut self,
    record_info: &RecordInfo,
    record_creator: &mut RecordCreator,
    push_record: bool,
  ) -> Result<(), HostError> {
    let anchor = self
      .output_anchor
      .as_mut()
      .ok_or_else(|| HostError::AnchorUnavailable(OUTPUT_ANCHOR.to_string()))?;

    anchor.init(record_info)?;
    if push_record {
      let record = record_creator.finalize_record();
      anchor.push_record(&record)?;
      record_creator.reset();
    }
    anchor.close();
    Ok(())
  }

  fn display_error(&self, message: &str) {
    self.engine.output_message(self.tool_id, MessageType::Error, message);
  }

  fn display_info(&self, message: &str) {
    self.engine.output_message(self.tool_id, MessageType::Info, message);
  }
}

fn fill_credential(record_creator: &mut RecordCreator, credential: &Credential) -> Result<(), HostError> {
  record_creator.set_from_string(USERNAME_INDEX, credential.username())?;
  record_creator.set_from_string(PASSWORD_INDEX, credential.password())
}

/// Input interface handed to upstream connections
///
/// The tool has no input anchors, so records are refused.
#[derive(Debug, Default)]
pub struct IncomingInterface;

impl IncomingInterface {
  pub fn init(&mut self, _record_info: &RecordInfo) -> bool {
    true
  }

  pub fn push_record(&mut self, _record: &Record) -> bool {
    false
  }

  pub fn update_progress(&mut self, _percent: f64) {}

  pub fn close(&mut self) {}
}
