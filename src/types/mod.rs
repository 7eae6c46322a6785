pub mod error;
pub mod page;

// Common type aliases
pub type PageId = u64;

// Constants shared by the on-disk layout and the storage manager
pub const PAGE_SIZE: usize = 4096;
pub const MAX_PAGE_COUNT: u64 = 1099511627775; // 2^40 - 1 (SQLite limit)
pub const MAX_IDENTIFIER_LENGTH: usize = 64;
pub const MAX_COLUMNS: usize = 32;
