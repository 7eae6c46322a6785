use crate::types::{
    MAX_COLUMNS, PAGE_SIZE,
    error::DatabaseError,
    page::{PAGE_HEADER_SIZE, PageHeader},
};

// B-Tree layout limits derived from the page size
pub const KEY_PAIR_SIZE: usize = 8; // key + pointer/record offset
pub const MAX_KEYS: usize = (PAGE_SIZE - PAGE_HEADER_SIZE - 4) / KEY_PAIR_SIZE;
pub const MAX_RECORDS: usize = MAX_KEYS; // leaf and interior share the limit
pub const MIN_KEYS: usize = MAX_KEYS / 2;

pub const INTERIOR_NODE_SIZE: usize =
    PAGE_HEADER_SIZE + 4 + MAX_COLUMNS * 4 + (MAX_COLUMNS + 1) * 4;
pub const LEAF_NODE_SIZE: usize = PAGE_HEADER_SIZE + 4 + MAX_COLUMNS * 4 + MAX_COLUMNS * 4;
pub const SYSTEM_CATALOG_SIZE: usize = PAGE_HEADER_SIZE + 8;

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn check_len(bytes: &[u8], needed: usize, what: &str) -> Result<(), DatabaseError> {
    if bytes.len() < needed {
        return Err(DatabaseError::InvalidInput {
            reason: format!("{} needs {} bytes, got {}", what, needed, bytes.len()),
        });
    }
    Ok(())
}

/// Interior B-Tree node shape. Data contract for the future B-Tree
/// component; the storage manager never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteriorNode {
    pub header: PageHeader,
    pub key_count: u32,
    pub keys: [u32; MAX_COLUMNS],
    /// n+1 child page numbers for n keys.
    pub child_pointers: [u32; MAX_COLUMNS + 1],
}

impl InteriorNode {
    pub fn to_bytes(&self) -> [u8; INTERIOR_NODE_SIZE] {
        let mut buffer = [0u8; INTERIOR_NODE_SIZE];
        buffer[..PAGE_HEADER_SIZE].copy_from_slice(&self.header.to_bytes());
        let mut offset = PAGE_HEADER_SIZE;
        buffer[offset..offset + 4].copy_from_slice(&self.key_count.to_le_bytes());
        offset += 4;
        for key in &self.keys {
            buffer[offset..offset + 4].copy_from_slice(&key.to_le_bytes());
            offset += 4;
        }
        for child in &self.child_pointers {
            buffer[offset..offset + 4].copy_from_slice(&child.to_le_bytes());
            offset += 4;
        }
        buffer
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DatabaseError> {
        check_len(bytes, INTERIOR_NODE_SIZE, "interior node")?;
        let header = PageHeader::from_bytes(&bytes[..PAGE_HEADER_SIZE])?;
        let mut offset = PAGE_HEADER_SIZE;
        let key_count = read_u32(bytes, offset);
        offset += 4;
        let mut keys = [0u32; MAX_COLUMNS];
        for key in keys.iter_mut() {
            *key = read_u32(bytes, offset);
            offset += 4;
        }
        let mut child_pointers = [0u32; MAX_COLUMNS + 1];
        for child in child_pointers.iter_mut() {
            *child = read_u32(bytes, offset);
            offset += 4;
        }
        Ok(Self {
            header,
            key_count,
            keys,
            child_pointers,
        })
    }
}

/// Leaf B-Tree node shape: keys plus in-page record offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub header: PageHeader,
    pub record_count: u32,
    pub keys: [u32; MAX_COLUMNS],
    pub record_offsets: [u32; MAX_COLUMNS],
}

impl LeafNode {
    pub fn to_bytes(&self) -> [u8; LEAF_NODE_SIZE] {
        let mut buffer = [0u8; LEAF_NODE_SIZE];
        buffer[..PAGE_HEADER_SIZE].copy_from_slice(&self.header.to_bytes());
        let mut offset = PAGE_HEADER_SIZE;
        buffer[offset..offset + 4].copy_from_slice(&self.record_count.to_le_bytes());
        offset += 4;
        for key in &self.keys {
            buffer[offset..offset + 4].copy_from_slice(&key.to_le_bytes());
            offset += 4;
        }
        for record_offset in &self.record_offsets {
            buffer[offset..offset + 4].copy_from_slice(&record_offset.to_le_bytes());
            offset += 4;
        }
        buffer
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DatabaseError> {
        check_len(bytes, LEAF_NODE_SIZE, "leaf node")?;
        let header = PageHeader::from_bytes(&bytes[..PAGE_HEADER_SIZE])?;
        let mut offset = PAGE_HEADER_SIZE;
        let record_count = read_u32(bytes, offset);
        offset += 4;
        let mut keys = [0u32; MAX_COLUMNS];
        for key in keys.iter_mut() {
            *key = read_u32(bytes, offset);
            offset += 4;
        }
        let mut record_offsets = [0u32; MAX_COLUMNS];
        for record_offset in record_offsets.iter_mut() {
            *record_offset = read_u32(bytes, offset);
            offset += 4;
        }
        Ok(Self {
            header,
            record_count,
            keys,
            record_offsets,
        })
    }
}

/// System catalog page prefix; catalog records follow in the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemCatalog {
    pub header: PageHeader,
    pub entry_count: u32,
    pub root_page: u32,
}

impl SystemCatalog {
    pub fn to_bytes(&self) -> [u8; SYSTEM_CATALOG_SIZE] {
        let mut buffer = [0u8; SYSTEM_CATALOG_SIZE];
        buffer[..PAGE_HEADER_SIZE].copy_from_slice(&self.header.to_bytes());
        buffer[PAGE_HEADER_SIZE..PAGE_HEADER_SIZE + 4]
            .copy_from_slice(&self.entry_count.to_le_bytes());
        buffer[PAGE_HEADER_SIZE + 4..PAGE_HEADER_SIZE + 8]
            .copy_from_slice(&self.root_page.to_le_bytes());
        buffer
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DatabaseError> {
        check_len(bytes, SYSTEM_CATALOG_SIZE, "system catalog")?;
        let header = PageHeader::from_bytes(&bytes[..PAGE_HEADER_SIZE])?;
        let entry_count = read_u32(bytes, PAGE_HEADER_SIZE);
        let root_page = read_u32(bytes, PAGE_HEADER_SIZE + 4);
        Ok(Self {
            header,
            entry_count,
            root_page,
        })
    }
}

const _: () = assert!(
    INTERIOR_NODE_SIZE <= PAGE_SIZE,
    "InteriorNode exceeds PAGE_SIZE"
);
const _: () = assert!(LEAF_NODE_SIZE <= PAGE_SIZE, "LeafNode exceeds PAGE_SIZE");
const _: () = assert!(
    SYSTEM_CATALOG_SIZE <= PAGE_SIZE,
    "SystemCatalog exceeds PAGE_SIZE"
);
