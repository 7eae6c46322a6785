use crate::{
    storage::MAGIC_NUMBER,
    types::{PAGE_SIZE, error::DatabaseError},
};

/// Page 0 of every database file: the magic value in bytes [0, 4),
/// the rest reserved and zero-filled. Written once at file creation
/// and never moved or reallocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderPage {
    pub magic: u32,
}

impl Default for HeaderPage {
    fn default() -> Self {
        Self {
            magic: MAGIC_NUMBER,
        }
    }
}

impl HeaderPage {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = vec![0u8; PAGE_SIZE];
        buffer[0..4].copy_from_slice(&self.magic.to_le_bytes());
        buffer
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DatabaseError> {
        if bytes.len() < 4 {
            return Err(DatabaseError::Corrupted {
                reason: "header page too short".to_string(),
            });
        }
        let magic = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        if magic != MAGIC_NUMBER {
            return Err(DatabaseError::Corrupted {
                reason: format!(
                    "bad magic number: expected {:#010x}, got {:#010x}",
                    MAGIC_NUMBER, magic
                ),
            });
        }
        Ok(Self { magic })
    }
}
