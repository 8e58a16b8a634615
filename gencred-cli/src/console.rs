//! # Console Host
//!
//! Minimal stand-in for the pipeline host so the tool can run from a
//! terminal: messages go to stderr, records go to stdout as JSON lines.

use std::io::{self, Write};

use gencred_plugin::{Engine, HostError, MessageType, OutputAnchor, OutputAnchorManager, Record, RecordInfo};
use serde_json::{Map, Value};

use crate::output::{error_line, info_line, warning_line};

/// Engine that prints tool messages to stderr
#[derive(Debug, Default)]
pub struct ConsoleEngine;

impl Engine for ConsoleEngine {
  fn output_message(&self, tool_id: i32, message_type: MessageType, message: &str) {
    let line = match message_type {
      MessageType::Info => info_line(message),
      MessageType::Warning => warning_line(message),
      MessageType::Error => error_line(message),
    };
    tracing::debug!(tool_id, ?message_type, "Tool message");
    eprintln!("{line}");
  }
}

/// Anchor that writes each record as a JSON object keyed by field name
pub struct ConsoleAnchor<W: Write> {
  name: String,
  writer: W,
  record_info: Option<RecordInfo>,
  closed: bool,
}

impl<W: Write> ConsoleAnchor<W> {
  pub fn new(name: impl Into<String>, writer: W) -> Self {
    Self {
      name: name.into(),
      writer,
      record_info: None,
      closed: false,
    }
  }

  pub fn into_writer(self) -> W {
    self.writer
  }
}

impl<W: Write> OutputAnchor for ConsoleAnchor<W> {
  fn init(&mut self, record_info: &RecordInfo) -> Result<(), HostError> {
    self.record_info = Some(record_info.clone());
    Ok(())
  }

  fn push_record(&mut self, record: &Record) -> Result<(), HostError> {
    if self.closed {
      return Err(HostError::AnchorClosed(self.name.clone()));
    }
    let record_info = self
      .record_info
      .as_ref()
      .ok_or_else(|| HostError::AnchorNotInitialized(self.name.clone()))?;
    if record.len() != record_info.len() {
      return Err(HostError::LayoutMismatch {
        expected: record_info.len(),
        actual: record.len(),
      });
    }

    let row: Map<String, Value> = record_info
      .fields()
      .iter()
      .zip(record.values())
      .map(|(field, value)| {
        let value = value.as_ref().map_or(Value::Null, |text| Value::String(text.clone()));
        (field.name.clone(), value)
      })
      .collect();

    serde_json::to_writer(&mut self.writer, &row).map_err(io::Error::from)?;
    writeln!(self.writer)?;
    Ok(())
  }

  fn close(&mut self) {
    if let Err(err) = self.writer.flush() {
      tracing::warn!(anchor = %self.name, "Failed to flush output: {err}");
    }
    self.closed = true;
  }

  fn assert_close(&self) -> Result<(), HostError> {
    if self.closed {
      Ok(())
    } else {
      Err(HostError::AnchorNotClosed(self.name.clone()))
    }
  }
}

/// Anchor manager serving one console anchor per requested name
pub struct ConsoleAnchorManager<F> {
  make_writer: F,
}

impl<F, W> ConsoleAnchorManager<F>
where
  F: FnMut() -> W,
  W: Write,
{
  pub fn new(make_writer: F) -> Self {
    Self { make_writer }
  }
}

impl<F, W> OutputAnchorManager for ConsoleAnchorManager<F>
where
  F: FnMut() -> W,
  W: Write,
{
  type Anchor = ConsoleAnchor<W>;

  fn get_output_anchor(&mut self, name: &str) -> Option<Self::Anchor> {
    Some(ConsoleAnchor::new(name, (self.make_writer)()))
  }
}
