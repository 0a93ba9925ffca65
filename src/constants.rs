//! Global constants for the kdump-config application.
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make configuration changes easier.

// Configuration store layout
/// Name of the configuration table holding all kdump settings
pub const KDUMP_TABLE: &str = "KDUMP";

/// Key of the single kdump configuration record within the table
pub const KDUMP_CONFIG_KEY: &str = "config";

// Filesystem locations
/// Default path of the JSON-backed configuration database
pub const CONFIG_DB_PATH: &str = "/etc/config_db.json";

/// Default path of the kdump-tools defaults file patched in remote mode
pub const KDUMP_TOOLS_PATH: &str = "/etc/default/kdump-tools";

// Factory defaults seeded into a fresh configuration database
/// Default reserved crash-kernel memory
pub const DEFAULT_MEMORY: &str = "256MB";

/// Default number of retained dumps
pub const DEFAULT_NUM_DUMPS: &str = "3";

// kdump-tools variable lines written when remote mode is enabled
/// Uncommented SSH target line with its placeholder value
pub const SSH_PLACEHOLDER_LINE: &str = "SSH=\"your_ssh_value\"";

/// Uncommented SSH key line with its placeholder value
pub const SSH_KEY_PLACEHOLDER_LINE: &str = "SSH_KEY=\"your_ssh_key_value\"";

// User-facing messages
/// Printed after every successful configuration change
pub const REBOOT_ADVISORY: &str =
    "KDUMP configuration changes may require a reboot to take effect.";
