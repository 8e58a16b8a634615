//! # Gencred Pipeline Plugin
//!
//! Host-facing side of gencred. The pipeline host hands the tool an XML
//! configuration fragment naming a generic credential; the tool publishes a
//! single record with `Username` and `Password` fields on its `Output`
//! anchor.
//!
//! The host runtime is represented by the traits in [`host`]; anything that
//! implements them can drive a [`CredentialsPlugin`].

pub mod config;
pub mod host;
pub mod plugin;
pub mod record;

pub use config::{ConfigError, PluginConfig};
pub use host::{Engine, HostError, MessageType, OutputAnchor, OutputAnchorManager};
pub use plugin::{
  CredentialsPlugin, FIELD_WIDTH, IncomingInterface, OUTPUT_ANCHOR, PASSWORD_FIELD, USERNAME_FIELD,
  build_record_info_out,
};
pub use record::{Field, FieldType, Record, RecordCreator, RecordInfo};
