pub mod header;
pub mod node;
pub mod schema;
pub mod storage_manager;

/// Magic value at the start of page 0, little-endian on disk.
pub const MAGIC_NUMBER: u32 = 0x12345678;
