//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for gencred.

mod lookup;
mod run;

use std::process::ExitCode;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};

use crate::output::ColorMode;

/// Top-level CLI command for gencred
#[derive(Parser)]
#[command(name = "gencred")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Read generic credentials from the Windows Credential Manager")]
#[command(
  long_about = "Gencred reads a named generic credential from the Windows Credential Manager.\n\n\
        It can print the credential directly or run the pipeline tool against a console\n\
        host, emitting the single Username/Password record as JSON."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    global = true,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for gencred
#[derive(Subcommand)]
pub enum Commands {
  /// Look up a generic credential and print it
  #[command(long_about = "Looks up a generic credential by name and prints its username and password.\n\n\
            The password is masked unless --show-password is given. Exits with status 1\n\
            when the credential does not exist or cannot be read.")]
  #[command(alias = "get")]
  Lookup(lookup::LookupArgs),

  /// Run the pipeline tool against a console host
  #[command(long_about = "Runs the pipeline tool with an XML configuration fragment.\n\n\
            Tool messages are written to stderr and the output record is written to\n\
            stdout as one JSON object per line. Exits with status 1 when the tool\n\
            fails to initialize.")]
  Run(run::RunArgs),
}

pub fn handle_cli(cli: Cli) -> Result<ExitCode> {
  cli.colors.apply();

  match cli.command {
    Commands::Lookup(args) => lookup::handle_lookup_command(args),
    Commands::Run(args) => run::handle_run_command(args),
  }
}
