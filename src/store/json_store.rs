//! JSON-file-backed configuration store.
//!
//! Mirrors the factory configuration database of the device image: a single
//! JSON document mapping table names to entries. A fresh store is seeded
//! with a default `KDUMP` config record, so first-boot CLI invocations find
//! the record they expect to update.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MEMORY, DEFAULT_NUM_DUMPS, KDUMP_CONFIG_KEY, KDUMP_TABLE,
};
use crate::store::{ConfigStore, EntryMap, Table};

/// On-disk shape: `{ "TABLE": { "key": { "attr": "value" } } }`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct Tables(HashMap<String, Table>);

/// [`ConfigStore`] persisted as a pretty-printed JSON file.
///
/// Every mutation rewrites the whole file; the document is small and the
/// rewrite keeps the store readable by other tooling at all times.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    tables: Tables,
}

impl JsonFileStore {
    /// Open the store at `path`, seeding factory defaults if the file does
    /// not exist yet.
    pub fn open(path: &Path) -> Result<Self> {
        let tables = if path.exists() {
            let content = fs::read_to_string(path)
                .context(format!("Failed to read config DB: {}", path.display()))?;
            serde_json::from_str(&content)
                .context(format!("Failed to parse config DB: {}", path.display()))?
        } else {
            info!("Config DB {} not found, seeding factory defaults", path.display());
            factory_defaults()
        };

        Ok(Self {
            path: path.to_path_buf(),
            tables,
        })
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.tables)
            .context("Failed to serialize config DB")?;
        fs::write(&self.path, json)
            .context(format!("Failed to write config DB: {}", self.path.display()))?;
        debug!("Persisted config DB to {}", self.path.display());
        Ok(())
    }
}

impl ConfigStore for JsonFileStore {
    fn get_table(&self, name: &str) -> Result<Option<Table>> {
        Ok(self.tables.0.get(name).cloned())
    }

    fn mod_entry(&mut self, table: &str, key: &str, attrs: EntryMap) -> Result<()> {
        let entry = self
            .tables
            .0
            .entry(table.to_string())
            .or_default()
            .entry(key.to_string())
            .or_default();
        entry.extend(attrs);
        self.persist()
    }

    fn delete_table(&mut self, name: &str) -> Result<()> {
        self.tables.0.remove(name);
        self.persist()
    }
}

/// Tables present in a factory-fresh configuration database.
fn factory_defaults() -> Tables {
    let config = EntryMap::from([
        ("enabled".to_string(), "false".to_string()),
        ("memory".to_string(), DEFAULT_MEMORY.to_string()),
        ("num_dumps".to_string(), DEFAULT_NUM_DUMPS.to_string()),
        ("remote".to_string(), "false".to_string()),
    ]);

    let kdump = Table::from([(KDUMP_CONFIG_KEY.to_string(), config)]);
    Tables(HashMap::from([(KDUMP_TABLE.to_string(), kdump)]))
}
