//! # Record Layout
//!
//! Field layouts published on output anchors and the rows built against
//! them. A field that was never set stays `None`, which the host renders as
//! its default unset value.

use tracing::warn;

use crate::host::HostError;

/// Storage type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
  /// Fixed-width narrow string
  String,
}

/// One column of a record layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
  pub name: String,
  pub field_type: FieldType,
  /// Maximum width in characters
  pub size: usize,
}

/// Ordered field layout of the records on an anchor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordInfo {
  fields: Vec<Field>,
}

impl RecordInfo {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a field and return its index
  pub fn add_field(&mut self, name: impl Into<String>, field_type: FieldType, size: usize) -> usize {
    self.fields.push(Field {
      name: name.into(),
      field_type,
      size,
    });
    self.fields.len() - 1
  }

  pub fn fields(&self) -> &[Field] {
    &self.fields
  }

  pub fn len(&self) -> usize {
    self.fields.len()
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }

  pub fn index_of(&self, name: &str) -> Option<usize> {
    self.fields.iter().position(|field| field.name == name)
  }

  /// Start building a record against this layout
  pub fn construct_record_creator(&self) -> RecordCreator {
    RecordCreator {
      fields: self.fields.clone(),
      values: vec![None; self.fields.len()],
    }
  }
}

/// Mutable row being filled in before it is pushed
#[derive(Debug, Clone)]
pub struct RecordCreator {
  fields: Vec<Field>,
  values: Vec<Option<String>>,
}

impl RecordCreator {
  /// Set field `index` from text, truncated to the field width
  pub fn set_from_string(&mut self, index: usize, value: &str) -> Result<(), HostError> {
    let len = self.fields.len();
    let field = self.fields.get(index).ok_or(HostError::FieldOutOfRange { index, len })?;

    let stored = match value.char_indices().nth(field.size) {
      Some((cut, _)) => {
        warn!(field = %field.name, width = field.size, "Value truncated to field width");
        &value[..cut]
      }
      None => value,
    };
    self.values[index] = Some(stored.to_string());
    Ok(())
  }

  /// Snapshot the current values as a finished record
  pub fn finalize_record(&self) -> Record {
    Record {
      values: self.values.clone(),
    }
  }

  /// Clear every field back to unset
  pub fn reset(&mut self) {
    self.values.iter_mut().for_each(|value| *value = None);
  }
}

/// Finished row as pushed through an anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
  values: Vec<Option<String>>,
}

impl Record {
  pub fn get(&self, index: usize) -> Option<&str> {
    self.values.get(index).and_then(|value| value.as_deref())
  }

  pub fn values(&self) -> &[Option<String>] {
    &self.values
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}
