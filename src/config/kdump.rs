//! Typed view of the persisted kdump configuration record.

use std::fmt;

use crate::store::EntryMap;

/// The kdump settings stored under `("KDUMP", "config")`.
///
/// All attributes are persisted as strings; this struct is the parsed form
/// the configurator makes decisions on. Missing attributes take the "not
/// configured" defaults, so an absent table parses to a record with remote
/// mode off and no credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KdumpConfig {
    pub enabled: bool,
    pub memory: String,
    pub num_dumps: u32,
    pub remote: bool,
    pub ssh_string: Option<String>,
    pub ssh_key: Option<String>,
}

impl KdumpConfig {
    /// Parse the attribute mapping of the config entry.
    pub fn from_attrs(attrs: &EntryMap) -> Self {
        Self {
            enabled: flag(attrs, "enabled"),
            memory: attrs.get("memory").cloned().unwrap_or_default(),
            num_dumps: attrs
                .get("num_dumps")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            remote: flag(attrs, "remote"),
            ssh_string: populated(attrs, "ssh_string"),
            ssh_key: populated(attrs, "ssh_key"),
        }
    }

    /// True when either SSH credential attribute is still set.
    ///
    /// Remote mode must not be disabled while this holds, or the store
    /// would silently keep abandoned credentials.
    pub fn has_ssh_credentials(&self) -> bool {
        self.ssh_string.is_some() || self.ssh_key.is_some()
    }
}

impl fmt::Display for KdumpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Kdump administrative mode: {}", on_off(self.enabled))?;
        writeln!(f, "Kdump memory reservation: {}", self.memory)?;
        writeln!(f, "Maximum number of dumps: {}", self.num_dumps)?;
        write!(f, "Kdump remote mode: {}", on_off(self.remote))?;
        if let Some(ssh) = &self.ssh_string {
            write!(f, "\nKdump SSH target: {}", ssh)?;
        }
        if let Some(key) = &self.ssh_key {
            write!(f, "\nKdump SSH key: {}", key)?;
        }
        Ok(())
    }
}

fn flag(attrs: &EntryMap, name: &str) -> bool {
    attrs.get(name).map(String::as_str) == Some("true")
}

/// An attribute counts as configured only when present and non-empty.
fn populated(attrs: &EntryMap, name: &str) -> Option<String> {
    attrs.get(name).filter(|v| !v.is_empty()).cloned()
}

fn on_off(value: bool) -> &'static str {
    if value {
        "enabled"
    } else {
        "disabled"
    }
}
