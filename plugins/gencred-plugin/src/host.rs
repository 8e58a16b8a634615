//! # Host Runtime Contract
//!
//! Callbacks the pipeline host provides to a tool: a messaging engine and the
//! output anchors records are pushed through.

use std::io;
use std::rc::Rc;

use thiserror::Error;

use crate::record::{Record, RecordInfo};

/// Severity of a message shown to the user by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
  Info,
  Warning,
  Error,
}

/// Errors raised while talking to host output anchors
#[derive(Debug, Error)]
pub enum HostError {
  #[error("output anchor '{0}' is not available")]
  AnchorUnavailable(String),

  #[error("output anchor '{0}' has not been initialized")]
  AnchorNotInitialized(String),

  #[error("output anchor '{0}' is already closed")]
  AnchorClosed(String),

  #[error("output anchor '{0}' was not closed")]
  AnchorNotClosed(String),

  #[error("field index {index} is out of range for a layout with {len} fields")]
  FieldOutOfRange { index: usize, len: usize },

  #[error("record has {actual} fields but the layout declares {expected}")]
  LayoutMismatch { expected: usize, actual: usize },

  #[error("failed to write record: {0}")]
  Io(#[from] io::Error),
}

/// Host messaging callback
pub trait Engine {
  /// Show `message` to the user on behalf of tool `tool_id`
  fn output_message(&self, tool_id: i32, message_type: MessageType, message: &str);
}

impl<E: Engine + ?Sized> Engine for &E {
  fn output_message(&self, tool_id: i32, message_type: MessageType, message: &str) {
    (**self).output_message(tool_id, message_type, message);
  }
}

impl<E: Engine + ?Sized> Engine for Rc<E> {
  fn output_message(&self, tool_id: i32, message_type: MessageType, message: &str) {
    (**self).output_message(tool_id, message_type, message);
  }
}

/// Outgoing connection a tool pushes records through
pub trait OutputAnchor {
  /// Announce the record layout to downstream tools
  fn init(&mut self, record_info: &RecordInfo) -> Result<(), HostError>;

  /// Send one record downstream
  fn push_record(&mut self, record: &Record) -> Result<(), HostError>;

  /// Signal that no more records will follow
  fn close(&mut self);

  /// Verify the anchor was closed
  fn assert_close(&self) -> Result<(), HostError>;
}

/// Lookup of a tool's output anchors by name
pub trait OutputAnchorManager {
  type Anchor: OutputAnchor;

  fn get_output_anchor(&mut self, name: &str) -> Option<Self::Anchor>;
}
