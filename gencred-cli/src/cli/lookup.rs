//! # Lookup Command
//!
//! Prints a single generic credential from the system credential store.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use gencred_core::{Credential, Lookup, lookup_generic_credential};
use serde_json::json;

use crate::output::{format_label, print_error, print_success};

const MASK: &str = "********";

/// Arguments for the lookup command
#[derive(Args)]
pub struct LookupArgs {
  /// Name the credential is stored under
  pub name: String,

  /// Print the password instead of a mask
  #[arg(long)]
  pub show_password: bool,

  /// Print the credential as a JSON object
  #[arg(long)]
  pub json: bool,
}

pub(crate) fn handle_lookup_command(args: LookupArgs) -> Result<ExitCode> {
  match lookup_generic_credential(&args.name) {
    Lookup::Found(credential) => {
      if args.json {
        println!("{}", render_json(&credential, args.show_password));
      } else {
        print_success(&format!("Retrieved credential for {}", args.name));
        println!("{}: {}", format_label("Username"), credential.username());
        println!(
          "{}: {}",
          format_label("Password"),
          shown_password(&credential, args.show_password)
        );
      }
      Ok(ExitCode::SUCCESS)
    }
    Lookup::Absent => {
      print_error(&format!(
        "Generic credential {} does not exist or cannot be retrieved",
        args.name
      ));
      Ok(ExitCode::FAILURE)
    }
  }
}

fn shown_password(credential: &Credential, show_password: bool) -> &str {
  if show_password { credential.password() } else { MASK }
}

fn render_json(credential: &Credential, show_password: bool) -> String {
  json!({
    "username": credential.username(),
    "password": shown_password(credential, show_password),
  })
  .to_string()
}
