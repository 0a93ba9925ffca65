//! Configuration store abstraction.
//!
//! The kdump configurator only ever talks to the [`ConfigStore`] trait, so
//! tests can substitute a mock and assert on exactly which writes happen.
//! The shipped implementation is the JSON-file-backed [`JsonFileStore`].

mod json_store;

pub use json_store::JsonFileStore;

use std::collections::HashMap;

use anyhow::Result;

#[cfg(test)]
use mockall::automock;

/// Attribute mapping of a single table entry.
pub type EntryMap = HashMap<String, String>;

/// A table: entry key to attribute mapping.
pub type Table = HashMap<String, EntryMap>;

/// Persistent key/value configuration backend keyed by `(table, key)`.
///
/// `get_table` distinguishes an absent table (`None`) from a present but
/// empty one, so callers can make the deleted-table failure path explicit
/// instead of relying on empty-map checks.
#[cfg_attr(test, automock)]
pub trait ConfigStore {
    /// Fetch a whole table, or `None` if it does not exist.
    fn get_table(&self, name: &str) -> Result<Option<Table>>;

    /// Merge `attrs` into the entry at `(table, key)`, creating the table
    /// and entry as needed. Existing attributes not named are kept.
    fn mod_entry(&mut self, table: &str, key: &str, attrs: EntryMap) -> Result<()>;

    /// Remove a table and all its entries. Removing an absent table is a
    /// no-op.
    fn delete_table(&mut self, name: &str) -> Result<()>;
}
