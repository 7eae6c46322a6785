use crate::types::{PAGE_SIZE, error::DatabaseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    Header = 0,
    Leaf = 1,
    Interior = 2,
    Catalog = 3,
}

impl PageType {
    pub fn from_u32(value: u32) -> Result<Self, DatabaseError> {
        match value {
            0 => Ok(PageType::Header),
            1 => Ok(PageType::Leaf),
            2 => Ok(PageType::Interior),
            3 => Ok(PageType::Catalog),
            _ => Err(DatabaseError::Corrupted {
                reason: format!("invalid page type tag: {}", value),
            }),
        }
    }

    pub fn as_u32(&self) -> u32 {
        *self as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFlag {
    Live = 0,
    Deleted = 1,
}

impl RecordFlag {
    pub fn from_u32(value: u32) -> Result<Self, DatabaseError> {
        match value {
            0 => Ok(RecordFlag::Live),
            1 => Ok(RecordFlag::Deleted),
            _ => Err(DatabaseError::Corrupted {
                reason: format!("invalid record flag: {}", value),
            }),
        }
    }

    pub fn as_u32(&self) -> u32 {
        *self as u32
    }
}

pub const PAGE_HEADER_SIZE: usize = 12;
pub const RECORD_HEADER_SIZE: usize = 12;

/*
 * Generic Page Layout on Disk
 * ┌─────────────────────────────────────────────────────────────────┐
 * │                    PAGE HEADER (12 bytes)                       │
 * │        page_type(4) | next_page(4) | entry_count(4)             │
 * ├─────────────────────────────────────────────────────────────────┤
 * │                       PAGE BODY                                 │
 * │  interpretation depends on page_type (B-Tree node, catalog, …)  │
 * └─────────────────────────────────────────────────────────────────┘
 * All integers little-endian. The storage manager never reads this
 * header; it is a contract for the layers built on top of it.
 */

/// Common header at the start of every non-header page. Reserved for
/// future B-Tree/catalog components; the storage manager treats pages
/// as opaque byte blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHeader {
    pub page_type: PageType,
    pub next_page: u32,
    pub entry_count: u32,
}

impl PageHeader {
    pub fn new(page_type: PageType) -> Self {
        Self {
            page_type,
            next_page: 0,
            entry_count: 0,
        }
    }

    pub fn to_bytes(&self) -> [u8; PAGE_HEADER_SIZE] {
        let mut buffer = [0u8; PAGE_HEADER_SIZE];
        buffer[0..4].copy_from_slice(&self.page_type.as_u32().to_le_bytes());
        buffer[4..8].copy_from_slice(&self.next_page.to_le_bytes());
        buffer[8..12].copy_from_slice(&self.entry_count.to_le_bytes());
        buffer
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DatabaseError> {
        if bytes.len() < PAGE_HEADER_SIZE {
            return Err(DatabaseError::InvalidInput {
                reason: format!(
                    "page header needs {} bytes, got {}",
                    PAGE_HEADER_SIZE,
                    bytes.len()
                ),
            });
        }
        let page_type = PageType::from_u32(u32::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3],
        ]))?;
        let next_page = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let entry_count = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        Ok(Self {
            page_type,
            next_page,
            entry_count,
        })
    }
}

/// Header preceding every record payload. Data contract only, like
/// [`PageHeader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub flag: RecordFlag,
    pub payload_size: u32,
    /// First overflow page, 0 if the payload fits in place.
    pub overflow_page: u32,
}

impl RecordHeader {
    pub fn to_bytes(&self) -> [u8; RECORD_HEADER_SIZE] {
        let mut buffer = [0u8; RECORD_HEADER_SIZE];
        buffer[0..4].copy_from_slice(&self.flag.as_u32().to_le_bytes());
        buffer[4..8].copy_from_slice(&self.payload_size.to_le_bytes());
        buffer[8..12].copy_from_slice(&self.overflow_page.to_le_bytes());
        buffer
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DatabaseError> {
        if bytes.len() < RECORD_HEADER_SIZE {
            return Err(DatabaseError::InvalidInput {
                reason: format!(
                    "record header needs {} bytes, got {}",
                    RECORD_HEADER_SIZE,
                    bytes.len()
                ),
            });
        }
        let flag = RecordFlag::from_u32(u32::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3],
        ]))?;
        let payload_size = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let overflow_page = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        Ok(Self {
            flag,
            payload_size,
            overflow_page,
        })
    }
}

// No on-disk structure may exceed a single page
const _: () = assert!(PAGE_HEADER_SIZE <= PAGE_SIZE, "PageHeader exceeds PAGE_SIZE");
const _: () = assert!(
    RECORD_HEADER_SIZE <= PAGE_SIZE,
    "RecordHeader exceeds PAGE_SIZE"
);
