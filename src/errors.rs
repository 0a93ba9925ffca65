//! Error taxonomy for kdump configuration transitions.
//!
//! The user-facing messages are part of the CLI contract: operator scripts
//! grep for them, so the wording here is stable. The command layer prints
//! them prefixed with `Error: ` and exits non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while applying a kdump configuration change.
#[derive(Debug, Error)]
pub enum KdumpError {
    /// Memory size did not match the `<digits>(KB|MB|GB)` grammar.
    #[error("Invalid memory size '{0}'. Expected a positive integer followed by KB, MB or GB.")]
    InvalidMemorySize(String),

    /// Dump count was not a non-negative integer.
    #[error("Invalid number of dumps '{0}'. Expected a non-negative integer.")]
    InvalidDumpCount(String),

    /// The KDUMP table (or its config record) is gone from the store.
    ///
    /// A factory-seeded store always carries the record, so this only
    /// happens after an external administrative delete.
    #[error("Unable to retrieve 'KDUMP' table from Config DB.")]
    MissingConfiguration,

    /// Remote mode enable requested while it is already on.
    #[error("Kdump Remote Mode is already enabled.")]
    AlreadyEnabled,

    /// Remote mode disable requested while it is already off.
    #[error("Kdump Remote Mode is already disabled.")]
    AlreadyDisabled,

    /// Remote mode disable refused while SSH credentials remain configured.
    #[error("Remove SSH_string and SSH_key from Config DB before disabling Kdump Remote Mode.")]
    SshCredentialsPresent,

    /// Configuration store read or write failed.
    #[error(transparent)]
    Store(#[from] anyhow::Error),

    /// The kdump-tools defaults file could not be rewritten.
    ///
    /// When this surfaces from a remote-mode transition the store write has
    /// already committed; the store is the source of truth and is not
    /// rolled back.
    #[error("Failed to update {path}: {source}")]
    FileUpdate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
