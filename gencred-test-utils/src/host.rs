use std::cell::RefCell;
use std::rc::Rc;

use gencred_plugin::{Engine, HostError, MessageType, OutputAnchor, OutputAnchorManager, Record, RecordInfo};

/// Engine that keeps every message it is given
#[derive(Debug, Default)]
pub struct RecordingEngine {
  messages: RefCell<Vec<(i32, MessageType, String)>>,
}

impl RecordingEngine {
  pub fn new() -> Self {
    Self::default()
  }

  /// All messages in the order they were emitted
  pub fn messages(&self) -> Vec<(i32, MessageType, String)> {
    self.messages.borrow().clone()
  }

  /// Message texts of the given type
  pub fn messages_of(&self, message_type: MessageType) -> Vec<String> {
    self
      .messages
      .borrow()
      .iter()
      .filter(|(_, kind, _)| *kind == message_type)
      .map(|(_, _, text)| text.clone())
      .collect()
  }

  pub fn errors(&self) -> Vec<String> {
    self.messages_of(MessageType::Error)
  }

  pub fn infos(&self) -> Vec<String> {
    self.messages_of(MessageType::Info)
  }
}

impl Engine for RecordingEngine {
  fn output_message(&self, tool_id: i32, message_type: MessageType, message: &str) {
    self
      .messages
      .borrow_mut()
      .push((tool_id, message_type, message.to_string()));
  }
}

/// Everything that happened on one recording anchor
#[derive(Debug, Default, Clone)]
pub struct AnchorState {
  pub name: String,
  pub record_info: Option<RecordInfo>,
  pub records: Vec<Record>,
  pub close_calls: usize,
}

impl AnchorState {
  pub fn is_closed(&self) -> bool {
    self.close_calls > 0
  }
}

/// Anchor that stores pushed records in shared state
#[derive(Debug, Clone)]
pub struct RecordingAnchor {
  state: Rc<RefCell<AnchorState>>,
}

impl OutputAnchor for RecordingAnchor {
  fn init(&mut self, record_info: &RecordInfo) -> Result<(), HostError> {
    self.state.borrow_mut().record_info = Some(record_info.clone());
    Ok(())
  }

  fn push_record(&mut self, record: &Record) -> Result<(), HostError> {
    let mut state = self.state.borrow_mut();
    if state.is_closed() {
      return Err(HostError::AnchorClosed(state.name.clone()));
    }
    let expected = match &state.record_info {
      Some(info) => info.len(),
      None => return Err(HostError::AnchorNotInitialized(state.name.clone())),
    };
    if record.len() != expected {
      return Err(HostError::LayoutMismatch {
        expected,
        actual: record.len(),
      });
    }
    state.records.push(record.clone());
    Ok(())
  }

  fn close(&mut self) {
    self.state.borrow_mut().close_calls += 1;
  }

  fn assert_close(&self) -> Result<(), HostError> {
    let state = self.state.borrow();
    if state.is_closed() {
      Ok(())
    } else {
      Err(HostError::AnchorNotClosed(state.name.clone()))
    }
  }
}

/// Anchor manager exposing a fixed set of recording anchors
#[derive(Debug, Default)]
pub struct RecordingAnchorManager {
  anchors: Vec<Rc<RefCell<AnchorState>>>,
}

impl RecordingAnchorManager {
  /// Manager with the given anchor names available
  pub fn with_anchors(names: &[&str]) -> Self {
    let anchors = names
      .iter()
      .map(|name| {
        Rc::new(RefCell::new(AnchorState {
          name: (*name).to_string(),
          ..AnchorState::default()
        }))
      })
      .collect();
    Self { anchors }
  }

  /// Snapshot of the named anchor's state
  pub fn anchor(&self, name: &str) -> Option<AnchorState> {
    self
      .anchors
      .iter()
      .find(|state| state.borrow().name == name)
      .map(|state| state.borrow().clone())
  }
}

impl OutputAnchorManager for RecordingAnchorManager {
  type Anchor = RecordingAnchor;

  fn get_output_anchor(&mut self, name: &str) -> Option<Self::Anchor> {
    self
      .anchors
      .iter()
      .find(|state| state.borrow().name == name)
      .map(|state| RecordingAnchor {
        state: Rc::clone(state),
      })
  }
}
