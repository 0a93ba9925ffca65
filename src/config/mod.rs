// Re-export all items from the submodules
mod kdump;
mod validate;

// Re-export the kdump configuration record
pub use kdump::KdumpConfig;

// Re-export input validation helpers
pub use validate::{parse_num_dumps, validate_memory_size};
