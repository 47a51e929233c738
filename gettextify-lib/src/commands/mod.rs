//! Command-line interface and orchestration for gettextify
//!
//! This module wires the table reader, the header metadata, and the MO compiler into
//! the single `gettextify <INPUT> <OUTPUT>` command.
//!
//! ## Execution Flow
//!
//! The `run` function parses the command line with clap and hands the arguments to
//! `convert`, which:
//!
//! 1. Sets up logging and loads the configuration file, if any
//! 2. Merges header metadata from defaults, the configuration file, and flags
//! 3. Reads the translation table into a catalog
//! 4. Creates the output directory when it is missing
//! 5. Compiles the catalog into the MO file
//!
//! All user-facing output goes through the [`Host`] trait so the whole flow can be
//! exercised in tests without touching the real stdout, stderr, or process exit.

mod common;
mod config;
mod convert;
mod host;
mod run;

pub use common::{ColorMode, LogLevel};
pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_CONFIG_TOML};
pub use convert::{ConvertArgs, HeaderArgs, convert};
pub use host::Host;
pub use run::run;
