use crate::types::{MAX_COLUMNS, MAX_IDENTIFIER_LENGTH, PAGE_SIZE, error::DatabaseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer = 0,
    String = 1,
    Float = 2,
    Double = 3,
}

impl DataType {
    pub fn from_u32(value: u32) -> Result<Self, DatabaseError> {
        match value {
            0 => Ok(DataType::Integer),
            1 => Ok(DataType::String),
            2 => Ok(DataType::Float),
            3 => Ok(DataType::Double),
            _ => Err(DatabaseError::Corrupted {
                reason: format!("invalid data type tag: {}", value),
            }),
        }
    }

    pub fn as_u32(&self) -> u32 {
        *self as u32
    }
}

pub const COLUMN_DEFINITION_SIZE: usize = MAX_IDENTIFIER_LENGTH + 8;
pub const TABLE_METADATA_SIZE: usize =
    MAX_IDENTIFIER_LENGTH + 8 + MAX_COLUMNS * COLUMN_DEFINITION_SIZE;
pub const CATALOG_ENTRY_SIZE: usize = MAX_IDENTIFIER_LENGTH + 8;

/// Writes `name` as a NUL-padded fixed-width identifier field.
/// The trailing NUL is mandatory, so names max out one byte short.
fn write_identifier(buffer: &mut [u8], name: &str) -> Result<(), DatabaseError> {
    let bytes = name.as_bytes();
    if bytes.len() >= MAX_IDENTIFIER_LENGTH {
        return Err(DatabaseError::InvalidInput {
            reason: format!(
                "identifier '{}' exceeds {} bytes",
                name,
                MAX_IDENTIFIER_LENGTH - 1
            ),
        });
    }
    buffer[..bytes.len()].copy_from_slice(bytes);
    Ok(())
}

fn read_identifier(bytes: &[u8]) -> Result<String, DatabaseError> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8(bytes[..end].to_vec()).map_err(|_| DatabaseError::Corrupted {
        reason: "identifier field is not valid UTF-8".to_string(),
    })
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Fixed-width column definition as stored inside [`TableMetadata`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    /// Fixed size for the column (e.g., string max length).
    pub data_size: u32,
}

impl ColumnDefinition {
    pub fn to_bytes(&self) -> Result<[u8; COLUMN_DEFINITION_SIZE], DatabaseError> {
        let mut buffer = [0u8; COLUMN_DEFINITION_SIZE];
        write_identifier(&mut buffer[..MAX_IDENTIFIER_LENGTH], &self.name)?;
        let mut offset = MAX_IDENTIFIER_LENGTH;
        buffer[offset..offset + 4].copy_from_slice(&self.data_type.as_u32().to_le_bytes());
        offset += 4;
        buffer[offset..offset + 4].copy_from_slice(&self.data_size.to_le_bytes());
        Ok(buffer)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DatabaseError> {
        if bytes.len() < COLUMN_DEFINITION_SIZE {
            return Err(DatabaseError::InvalidInput {
                reason: format!(
                    "column definition needs {} bytes, got {}",
                    COLUMN_DEFINITION_SIZE,
                    bytes.len()
                ),
            });
        }
        let name = read_identifier(&bytes[..MAX_IDENTIFIER_LENGTH])?;
        let data_type = DataType::from_u32(read_u32(bytes, MAX_IDENTIFIER_LENGTH))?;
        let data_size = read_u32(bytes, MAX_IDENTIFIER_LENGTH + 4);
        Ok(Self {
            name,
            data_type,
            data_size,
        })
    }
}

/// Full table description: name, root page of the table's B-Tree and up
/// to [`MAX_COLUMNS`] column definitions. Unused column slots are
/// zero-filled on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMetadata {
    pub name: String,
    pub root_page: u32,
    pub columns: Vec<ColumnDefinition>,
}

impl TableMetadata {
    pub fn to_bytes(&self) -> Result<[u8; TABLE_METADATA_SIZE], DatabaseError> {
        if self.columns.len() > MAX_COLUMNS {
            return Err(DatabaseError::InvalidInput {
                reason: format!(
                    "table '{}' has {} columns (max {})",
                    self.name,
                    self.columns.len(),
                    MAX_COLUMNS
                ),
            });
        }
        let mut buffer = [0u8; TABLE_METADATA_SIZE];
        write_identifier(&mut buffer[..MAX_IDENTIFIER_LENGTH], &self.name)?;
        let mut offset = MAX_IDENTIFIER_LENGTH;
        buffer[offset..offset + 4].copy_from_slice(&(self.columns.len() as u32).to_le_bytes());
        offset += 4;
        buffer[offset..offset + 4].copy_from_slice(&self.root_page.to_le_bytes());
        offset += 4;
        for column in &self.columns {
            buffer[offset..offset + COLUMN_DEFINITION_SIZE].copy_from_slice(&column.to_bytes()?);
            offset += COLUMN_DEFINITION_SIZE;
        }
        Ok(buffer)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DatabaseError> {
        if bytes.len() < TABLE_METADATA_SIZE {
            return Err(DatabaseError::InvalidInput {
                reason: format!(
                    "table metadata needs {} bytes, got {}",
                    TABLE_METADATA_SIZE,
                    bytes.len()
                ),
            });
        }
        let name = read_identifier(&bytes[..MAX_IDENTIFIER_LENGTH])?;
        let column_count = read_u32(bytes, MAX_IDENTIFIER_LENGTH) as usize;
        if column_count > MAX_COLUMNS {
            return Err(DatabaseError::Corrupted {
                reason: format!("column count {} exceeds {}", column_count, MAX_COLUMNS),
            });
        }
        let root_page = read_u32(bytes, MAX_IDENTIFIER_LENGTH + 4);
        let mut columns = Vec::with_capacity(column_count);
        let mut offset = MAX_IDENTIFIER_LENGTH + 8;
        for _ in 0..column_count {
            columns.push(ColumnDefinition::from_bytes(
                &bytes[offset..offset + COLUMN_DEFINITION_SIZE],
            )?);
            offset += COLUMN_DEFINITION_SIZE;
        }
        Ok(Self {
            name,
            root_page,
            columns,
        })
    }
}

/// Catalog record header pointing a table name at its B-Tree root.
/// Column definitions follow in the record payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub root_page: u32,
    pub column_count: u32,
}

impl CatalogEntry {
    pub fn to_bytes(&self) -> Result<[u8; CATALOG_ENTRY_SIZE], DatabaseError> {
        let mut buffer = [0u8; CATALOG_ENTRY_SIZE];
        write_identifier(&mut buffer[..MAX_IDENTIFIER_LENGTH], &self.name)?;
        let mut offset = MAX_IDENTIFIER_LENGTH;
        buffer[offset..offset + 4].copy_from_slice(&self.root_page.to_le_bytes());
        offset += 4;
        buffer[offset..offset + 4].copy_from_slice(&self.column_count.to_le_bytes());
        Ok(buffer)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DatabaseError> {
        if bytes.len() < CATALOG_ENTRY_SIZE {
            return Err(DatabaseError::InvalidInput {
                reason: format!(
                    "catalog entry needs {} bytes, got {}",
                    CATALOG_ENTRY_SIZE,
                    bytes.len()
                ),
            });
        }
        let name = read_identifier(&bytes[..MAX_IDENTIFIER_LENGTH])?;
        let root_page = read_u32(bytes, MAX_IDENTIFIER_LENGTH);
        let column_count = read_u32(bytes, MAX_IDENTIFIER_LENGTH + 4);
        Ok(Self {
            name,
            root_page,
            column_count,
        })
    }
}

const _: () = assert!(
    COLUMN_DEFINITION_SIZE <= PAGE_SIZE,
    "ColumnDefinition exceeds PAGE_SIZE"
);
const _: () = assert!(
    TABLE_METADATA_SIZE <= PAGE_SIZE,
    "TableMetadata exceeds PAGE_SIZE"
);
const _: () = assert!(
    CATALOG_ENTRY_SIZE <= PAGE_SIZE,
    "CatalogEntry exceeds PAGE_SIZE"
);
