//! Core decision logic for kdump configuration transitions.
//!
//! [`KdumpConfigurator`] reads the current state from the configuration
//! store, validates the requested transition and performs the writes. For
//! remote mode it also keeps the kdump-tools defaults file in sync; the
//! store write always happens first and is the authoritative state change.

use log::info;

use crate::config::{validate_memory_size, KdumpConfig};
use crate::constants::{KDUMP_CONFIG_KEY, KDUMP_TABLE};
use crate::errors::KdumpError;
use crate::store::{ConfigStore, EntryMap};
use crate::system_file::KdumpToolsFile;

/// Requested remote-mode transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteAction {
    Enable,
    Disable,
}

/// Applies kdump configuration changes against an explicit store handle.
pub struct KdumpConfigurator<'a, S: ConfigStore + ?Sized> {
    store: &'a mut S,
    kdump_tools: KdumpToolsFile,
}

impl<'a, S: ConfigStore + ?Sized> KdumpConfigurator<'a, S> {
    pub fn new(store: &'a mut S, kdump_tools: KdumpToolsFile) -> Self {
        Self { store, kdump_tools }
    }

    /// Turn crash dumping on.
    pub fn enable(&mut self) -> Result<(), KdumpError> {
        self.write_config_attr("enabled", "true")
    }

    /// Turn crash dumping off.
    pub fn disable(&mut self) -> Result<(), KdumpError> {
        self.write_config_attr("enabled", "false")
    }

    /// Set the reserved crash-kernel memory, e.g. `256MB`.
    pub fn set_memory(&mut self, size: &str) -> Result<(), KdumpError> {
        validate_memory_size(size)?;
        self.write_config_attr("memory", size)
    }

    /// Set the number of dumps retained on the device.
    pub fn set_num_dumps(&mut self, count: u32) -> Result<(), KdumpError> {
        self.write_config_attr("num_dumps", &count.to_string())
    }

    /// Transition remote (SSH offload) mode.
    ///
    /// Validates against the current state before any write: enabling an
    /// already enabled mode or disabling an already disabled one fails
    /// without mutation, as does disabling while SSH credentials remain in
    /// the store. On a valid transition the store is updated with exactly
    /// one `mod_entry` call, then the kdump-tools file is rewritten to
    /// match. A file failure is surfaced but the store change stands.
    pub fn set_remote(&mut self, action: RemoteAction) -> Result<(), KdumpError> {
        // An absent table is a valid unconfigured state here: remote mode
        // off, no credentials.
        let attrs = self
            .store
            .get_table(KDUMP_TABLE)?
            .and_then(|mut table| table.remove(KDUMP_CONFIG_KEY))
            .unwrap_or_default();
        let current = KdumpConfig::from_attrs(&attrs);

        let enable = match action {
            RemoteAction::Enable if current.remote => return Err(KdumpError::AlreadyEnabled),
            RemoteAction::Enable => true,
            RemoteAction::Disable if !current.remote => return Err(KdumpError::AlreadyDisabled),
            RemoteAction::Disable if current.has_ssh_credentials() => {
                return Err(KdumpError::SshCredentialsPresent)
            }
            RemoteAction::Disable => false,
        };

        self.store.mod_entry(
            KDUMP_TABLE,
            KDUMP_CONFIG_KEY,
            EntryMap::from([("remote".to_string(), bool_attr(enable).to_string())]),
        )?;
        info!("Kdump remote mode set to {}", bool_attr(enable));

        self.kdump_tools.apply(enable)
    }

    /// Read the current configuration record.
    pub fn current(&self) -> Result<KdumpConfig, KdumpError> {
        let attrs = self.require_config()?;
        Ok(KdumpConfig::from_attrs(&attrs))
    }

    /// Fetch the config entry, failing if the table was deleted externally.
    fn require_config(&self) -> Result<EntryMap, KdumpError> {
        self.store
            .get_table(KDUMP_TABLE)?
            .and_then(|mut table| table.remove(KDUMP_CONFIG_KEY))
            .ok_or(KdumpError::MissingConfiguration)
    }

    fn write_config_attr(&mut self, name: &str, value: &str) -> Result<(), KdumpError> {
        self.require_config()?;
        self.store.mod_entry(
            KDUMP_TABLE,
            KDUMP_CONFIG_KEY,
            EntryMap::from([(name.to_string(), value.to_string())]),
        )?;
        info!("Set KDUMP {} to {}", name, value);
        Ok(())
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
