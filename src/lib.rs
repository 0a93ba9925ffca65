//! # kdump-config
//!
//! Configuration-management CLI for the kdump crash-dump subsystem on a
//! network device's control plane.
//!
//! ## Overview
//!
//! Operators use this tool to enable or disable crash dumping, set the
//! reserved crash-kernel memory and dump retention count, and toggle remote
//! (SSH-based) dump offload. Every invocation performs one configuration
//! transition: read the persisted state, validate the request, write the
//! new state to the configuration store and, for remote mode, keep the
//! kdump-tools defaults file in sync.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use kdump_config::configurator::{KdumpConfigurator, RemoteAction};
//! use kdump_config::store::JsonFileStore;
//! use kdump_config::system_file::KdumpToolsFile;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut store = JsonFileStore::open(Path::new("/etc/config_db.json"))?;
//! let kdump_tools = KdumpToolsFile::new(Path::new("/etc/default/kdump-tools"));
//!
//! let mut configurator = KdumpConfigurator::new(&mut store, kdump_tools);
//! configurator.set_remote(RemoteAction::Enable)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`commands`]: Subcommand dispatch, user-facing text, exit codes
//! - [`configurator`]: Core transition logic and validation
//! - [`system_file`]: kdump-tools defaults file editor
//! - [`store`]: Configuration store trait and JSON-file backend
//! - [`config`]: Typed kdump record and input validation
//! - [`errors`]: Error taxonomy with stable operator-facing messages
//! - [`constants`]: Table names, file paths, messages

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Subcommand dispatch mapping results to text and exit codes
pub mod commands;

/// Typed kdump configuration record and input validation
pub mod config;

/// Core decision logic for configuration transitions
pub mod configurator;

/// Application constants: table names, paths, user-facing messages
pub mod constants;

/// Error taxonomy for configuration transitions
pub mod errors;

/// Configuration store trait and the JSON-file-backed implementation
pub mod store;

/// Editor for the kdump-tools defaults file
pub mod system_file;
