//! # Run Command
//!
//! Drives the pipeline tool through its full host lifecycle against the
//! console host.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use gencred_core::system_store;
use gencred_plugin::{CredentialsPlugin, OUTPUT_ANCHOR};
use tracing::info;

use crate::config::read_config_xml;
use crate::console::{ConsoleAnchorManager, ConsoleEngine};

/// Arguments for the run command
#[derive(Args)]
pub struct RunArgs {
  /// XML configuration file, or '-' for stdin [default: <config dir>/config.xml]
  #[arg(short, long, value_name = "PATH")]
  pub config: Option<PathBuf>,

  /// Tool id reported with every message
  #[arg(long, default_value_t = 1)]
  pub tool_id: i32,

  /// Maximum records to emit; 0 publishes only the layout, negative means no limit
  #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
  pub record_limit: i64,
}

pub(crate) fn handle_run_command(args: RunArgs) -> Result<ExitCode> {
  let xml = read_config_xml(args.config.as_deref())?;

  let mut plugin = CredentialsPlugin::new(
    args.tool_id,
    ConsoleEngine,
    ConsoleAnchorManager::new(io::stdout),
    system_store(),
  );

  if !plugin.init(&xml) {
    return Ok(ExitCode::FAILURE);
  }
  plugin.add_outgoing_connection(OUTPUT_ANCHOR);

  let pushed = plugin.push_all_records(args.record_limit);
  plugin.close(!pushed);
  info!(tool_id = args.tool_id, pushed, "Tool run finished");

  Ok(if pushed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
