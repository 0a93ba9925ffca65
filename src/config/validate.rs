//! Validation of operator-supplied configuration values.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::KdumpError;

lazy_static! {
    /// Accepted memory-size tokens: a positive integer followed by a
    /// binary-prefix unit, e.g. `256MB`.
    static ref MEMORY_SIZE_RE: Regex = Regex::new(r"^[1-9][0-9]*(KB|MB|GB)$").unwrap();
}

/// Check a reserved-memory size token such as `256MB`.
pub fn validate_memory_size(size: &str) -> Result<(), KdumpError> {
    if MEMORY_SIZE_RE.is_match(size) {
        Ok(())
    } else {
        Err(KdumpError::InvalidMemorySize(size.to_string()))
    }
}

/// Parse the `num_dumps` CLI argument.
///
/// Used as a clap value parser so malformed input is rejected with the
/// stable validation message before any store access happens.
pub fn parse_num_dumps(value: &str) -> Result<u32, KdumpError> {
    value
        .parse()
        .map_err(|_| KdumpError::InvalidDumpCount(value.to_string()))
}
