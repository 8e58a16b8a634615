use anyhow::{Context, Result};
use gencred_plugin::{CredentialsPlugin, FIELD_WIDTH, MessageType, OUTPUT_ANCHOR, PASSWORD_FIELD, USERNAME_FIELD};
use gencred_test_utils::{MockCredentialStore, RecordingAnchorManager, RecordingEngine, credential_config_xml};

const TOOL_ID: i32 = 7;

fn plugin(
  engine: &RecordingEngine,
  store: MockCredentialStore,
) -> CredentialsPlugin<&RecordingEngine, RecordingAnchorManager, MockCredentialStore> {
  CredentialsPlugin::new(
    TOOL_ID,
    engine,
    RecordingAnchorManager::with_anchors(&[OUTPUT_ANCHOR]),
    store,
  )
}

#[test]
fn missing_credential_name_fails_init_with_one_error() {
  let engine = RecordingEngine::new();
  let mut plugin = plugin(&engine, MockCredentialStore::new());

  assert!(!plugin.init("<Configuration><Other>x</Other></Configuration>"));

  assert_eq!(
    engine.messages(),
    vec![(
      TOOL_ID,
      MessageType::Error,
      "Generic Credential name cannot be empty.".to_string()
    )]
  );
  assert!(plugin.config().is_none());
  assert!(!plugin.push_all_records(-1));
  plugin.close(true);
  assert_eq!(engine.messages().len(), 1);
}

#[test]
fn malformed_configuration_fails_init_with_one_error() {
  let engine = RecordingEngine::new();
  let mut plugin = plugin(&engine, MockCredentialStore::new());

  assert!(!plugin.init("<Configuration><credential_name>"));
  plugin.close(true);

  let errors = engine.errors();
  assert_eq!(errors.len(), 1);
  assert!(errors[0].starts_with("Invalid tool configuration"));
}

#[test]
fn missing_output_anchor_fails_init() {
  let engine = RecordingEngine::new();
  let mut plugin = CredentialsPlugin::new(
    TOOL_ID,
    &engine,
    RecordingAnchorManager::with_anchors(&["Other"]),
    MockCredentialStore::new(),
  );

  assert!(!plugin.init(&credential_config_xml("warehouse")));
  plugin.close(true);
  assert_eq!(engine.errors(), vec!["output anchor 'Output' is not available".to_string()]);
}

#[test]
fn found_credential_is_pushed_as_single_record() -> Result<()> {
  let engine = RecordingEngine::new();
  let store = MockCredentialStore::new().with_credential("warehouse", "etl_user", "s3cr3t");
  let mut plugin = plugin(&engine, store);

  assert!(plugin.init(&credential_config_xml("warehouse")));
  assert!(plugin.add_outgoing_connection(OUTPUT_ANCHOR));
  assert!(plugin.push_all_records(-1));
  plugin.close(false);

  let anchor = plugin.anchor_manager().anchor(OUTPUT_ANCHOR).context("anchor exists")?;
  let record_info = anchor.record_info.context("layout published")?;
  let names: Vec<&str> = record_info.fields().iter().map(|field| field.name.as_str()).collect();
  assert_eq!(names, vec![USERNAME_FIELD, PASSWORD_FIELD]);
  assert!(record_info.fields().iter().all(|field| field.size == FIELD_WIDTH));

  assert_eq!(anchor.records.len(), 1);
  assert_eq!(anchor.records[0].get(0), Some("etl_user"));
  assert_eq!(anchor.records[0].get(1), Some("s3cr3t"));
  assert_eq!(anchor.close_calls, 1);

  assert_eq!(
    engine.messages(),
    vec![(
      TOOL_ID,
      MessageType::Info,
      "Retrieved credential for warehouse".to_string()
    )]
  );
  Ok(())
}

#[test]
fn nonexistent_credential_leaves_fields_unset() -> Result<()> {
  let engine = RecordingEngine::new();
  let store = MockCredentialStore::new().with_credential("warehouse", "etl_user", "s3cr3t");
  let mut plugin = plugin(&engine, store);

  assert!(plugin.init(&credential_config_xml("ghost")));
  assert!(plugin.push_all_records(-1));
  plugin.close(true);

  let anchor = plugin.anchor_manager().anchor(OUTPUT_ANCHOR).context("anchor exists")?;
  assert_eq!(anchor.records.len(), 1);
  assert_eq!(anchor.records[0].values(), &[None, None]);
  assert!(anchor.is_closed());

  assert_eq!(
    engine.errors(),
    vec!["Generic credential ghost does not exist or cannot be retrieved".to_string()]
  );
  assert_eq!(engine.messages().len(), 1);
  Ok(())
}

#[test]
fn credential_name_is_looked_up_verbatim() -> Result<()> {
  let engine = RecordingEngine::new();
  let store = MockCredentialStore::new()
    .with_credential("prod", "trimmed", "wrong")
    .with_credential("prod ", "padded", "right");
  let mut plugin = plugin(&engine, store);

  assert!(plugin.init("<Configuration><credential_name>prod </credential_name></Configuration>"));
  assert!(plugin.push_all_records(-1));

  let anchor = plugin.anchor_manager().anchor(OUTPUT_ANCHOR).context("anchor exists")?;
  assert_eq!(anchor.records[0].get(0), Some("padded"));
  assert_eq!(anchor.records[0].get(1), Some("right"));
  Ok(())
}

#[test]
fn long_values_are_truncated_to_field_width() -> Result<()> {
  let engine = RecordingEngine::new();
  let long_password = "x".repeat(FIELD_WIDTH + 25);
  let store = MockCredentialStore::new().with_credential("long", "user", &long_password);
  let mut plugin = plugin(&engine, store);

  assert!(plugin.init(&credential_config_xml("long")));
  assert!(plugin.push_all_records(-1));

  let anchor = plugin.anchor_manager().anchor(OUTPUT_ANCHOR).context("anchor exists")?;
  assert_eq!(anchor.records[0].get(1).map(str::len), Some(FIELD_WIDTH));
  Ok(())
}

#[test]
fn zero_record_limit_publishes_layout_only() -> Result<()> {
  let engine = RecordingEngine::new();
  let store = MockCredentialStore::new().with_credential("warehouse", "etl_user", "s3cr3t");
  let mut plugin = plugin(&engine, store);

  assert!(plugin.init(&credential_config_xml("warehouse")));
  assert!(plugin.push_all_records(0));
  plugin.close(false);

  let anchor = plugin.anchor_manager().anchor(OUTPUT_ANCHOR).context("anchor exists")?;
  assert!(anchor.record_info.is_some());
  assert!(anchor.records.is_empty());
  assert!(anchor.is_closed());
  assert!(engine.infos().is_empty());
  assert!(engine.messages().is_empty());
  Ok(())
}

#[test]
fn close_without_push_reports_open_anchor() {
  let engine = RecordingEngine::new();
  let mut plugin = plugin(&engine, MockCredentialStore::new());

  assert!(plugin.init(&credential_config_xml("warehouse")));
  plugin.close(false);

  assert_eq!(engine.errors(), vec!["output anchor 'Output' was not closed".to_string()]);
}

#[test]
fn incoming_connections_accept_no_records() {
  let engine = RecordingEngine::new();
  let mut plugin = plugin(&engine, MockCredentialStore::new());
  let mut incoming = plugin.add_incoming_connection("Input", "#1");

  let layout = gencred_plugin::build_record_info_out();
  assert!(incoming.init(&layout));
  assert!(!incoming.push_record(&layout.construct_record_creator().finalize_record()));
  incoming.close();
}
