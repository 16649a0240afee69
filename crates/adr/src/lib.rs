use anyhow::Result;
use clap::{CommandFactory as _, Parser, Subcommand};

mod commands;
mod config;
mod error;
mod utils;

pub use crate::config::{AdrConfig, AdrPaths, CONFIG_FILE_NAME, resolve_directory};
pub use crate::error::{ConfigError, InitError, UsageError};

use crate::config::AppContext;

const INIT_LONG_ABOUT: &str = "Initializes the ADR configuration with a base directory.
This is a prerequisite to running any other subcommand.
The path to the base directory will be stored in a .adrrc.yml file.";

/// adr - Manage Architecture Decision Records in your command line.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
  /// Initialize ADRs configuration
  #[command(long_about = INIT_LONG_ABOUT, override_usage = "adr init [OPTIONS] <DIRECTORY>")]
  Init {
    /// Directory where the ADRs are stored
    directory: Option<String>,
  },
  /// Print the configured ADRs directory
  Path,
}

pub fn parse() -> Cli {
  Cli::parse()
}

pub fn run() -> Result<()> {
  init_logging();
  let cli = parse();
  let cwd = std::env::current_dir()?;
  let ctx = AppContext::new(AdrPaths::new(cwd));

  match cli.command {
    Some(Commands::Init { directory }) => {
      commands::init::run(&ctx, directory.as_deref())?;
    }
    Some(Commands::Path) => {
      commands::path::run(&ctx)?;
    }
    None => {
      Cli::command().print_help()?;
    }
  }

  Ok(())
}

// Diagnostics stay quiet unless RUST_LOG asks for them.
fn init_logging() {
  let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
    .try_init();
}

/// Rendered help of a subcommand, printed after usage errors.
pub(crate) fn subcommand_help(name: &str) -> String {
  let mut cmd = Cli::command();
  cmd.build();
  cmd
    .find_subcommand_mut(name)
    .map(|sub| sub.render_long_help().to_string())
    .unwrap_or_default()
}
