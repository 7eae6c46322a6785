use lumbung::{
    storage::{
        header::HeaderPage,
        node::{
            INTERIOR_NODE_SIZE, InteriorNode, LEAF_NODE_SIZE, LeafNode, MAX_KEYS, MIN_KEYS,
            SYSTEM_CATALOG_SIZE, SystemCatalog,
        },
        schema::{
            CATALOG_ENTRY_SIZE, COLUMN_DEFINITION_SIZE, CatalogEntry, ColumnDefinition, DataType,
            TABLE_METADATA_SIZE, TableMetadata,
        },
    },
    types::{
        MAX_COLUMNS, PAGE_SIZE,
        error::DatabaseError,
        page::{PAGE_HEADER_SIZE, PageHeader, PageType, RECORD_HEADER_SIZE, RecordFlag, RecordHeader},
    },
};

#[test]
fn test_encoded_sizes_fit_one_page() {
    assert!(PAGE_HEADER_SIZE <= PAGE_SIZE);
    assert!(RECORD_HEADER_SIZE <= PAGE_SIZE);
    assert!(COLUMN_DEFINITION_SIZE <= PAGE_SIZE);
    assert!(TABLE_METADATA_SIZE <= PAGE_SIZE);
    assert!(CATALOG_ENTRY_SIZE <= PAGE_SIZE);
    assert!(INTERIOR_NODE_SIZE <= PAGE_SIZE);
    assert!(LEAF_NODE_SIZE <= PAGE_SIZE);
    assert!(SYSTEM_CATALOG_SIZE <= PAGE_SIZE);
}

#[test]
fn test_btree_limits_derived_from_page_size() {
    assert_eq!(MAX_KEYS, (PAGE_SIZE - PAGE_HEADER_SIZE - 4) / 8);
    assert_eq!(MIN_KEYS, MAX_KEYS / 2);
    assert!(MAX_COLUMNS <= MAX_KEYS);
}

#[test]
fn test_page_header_byte_layout() {
    let header = PageHeader {
        page_type: PageType::Interior,
        next_page: 0x01020304,
        entry_count: 9,
    };
    let bytes = header.to_bytes();
    // little-endian, fixed field order: type, next, count
    assert_eq!(&bytes[0..4], &[2, 0, 0, 0]);
    assert_eq!(&bytes[4..8], &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(&bytes[8..12], &[9, 0, 0, 0]);
    assert_eq!(PageHeader::from_bytes(&bytes).unwrap(), header);
}

#[test]
fn test_page_header_rejects_unknown_tag() {
    let mut bytes = PageHeader::new(PageType::Leaf).to_bytes();
    bytes[0] = 200;
    let err = PageHeader::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, DatabaseError::Corrupted { .. }));
}

#[test]
fn test_record_header_byte_layout() {
    let header = RecordHeader {
        flag: RecordFlag::Deleted,
        payload_size: 300,
        overflow_page: 0,
    };
    let bytes = header.to_bytes();
    assert_eq!(&bytes[0..4], &[1, 0, 0, 0]);
    assert_eq!(&bytes[4..8], &[0x2C, 0x01, 0, 0]);
    assert_eq!(RecordHeader::from_bytes(&bytes).unwrap(), header);
}

#[test]
fn test_header_page_round_trip_and_magic_check() {
    let bytes = HeaderPage::default().to_bytes();
    assert_eq!(bytes.len(), PAGE_SIZE);
    assert!(HeaderPage::from_bytes(&bytes).is_ok());

    let mut tampered = bytes.clone();
    tampered[0] ^= 0xFF;
    assert!(matches!(
        HeaderPage::from_bytes(&tampered).unwrap_err(),
        DatabaseError::Corrupted { .. }
    ));
    assert!(matches!(
        HeaderPage::from_bytes(&bytes[..2]).unwrap_err(),
        DatabaseError::Corrupted { .. }
    ));
}

#[test]
fn test_column_definition_fixed_width_encoding() {
    let column = ColumnDefinition {
        name: "id".to_string(),
        data_type: DataType::Integer,
        data_size: 8,
    };
    let bytes = column.to_bytes().unwrap();
    assert_eq!(&bytes[0..2], b"id");
    assert!(bytes[2..64].iter().all(|&b| b == 0));
    assert_eq!(ColumnDefinition::from_bytes(&bytes).unwrap(), column);
}

#[test]
fn test_oversized_identifier_rejected() {
    let column = ColumnDefinition {
        name: "c".repeat(64),
        data_type: DataType::String,
        data_size: 32,
    };
    assert!(matches!(
        column.to_bytes().unwrap_err(),
        DatabaseError::InvalidInput { .. }
    ));
}

#[test]
fn test_table_metadata_encodes_column_list() {
    let table = TableMetadata {
        name: "users".to_string(),
        root_page: 3,
        columns: vec![
            ColumnDefinition {
                name: "id".to_string(),
                data_type: DataType::Integer,
                data_size: 8,
            },
            ColumnDefinition {
                name: "name".to_string(),
                data_type: DataType::String,
                data_size: 64,
            },
        ],
    };
    let bytes = table.to_bytes().unwrap();
    assert_eq!(bytes.len(), TABLE_METADATA_SIZE);
    let decoded = TableMetadata::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, table);
    // unused column slots stay zero-filled
    let used = 64 + 8 + 2 * COLUMN_DEFINITION_SIZE;
    assert!(bytes[used..].iter().all(|&b| b == 0));
}

#[test]
fn test_table_metadata_rejects_too_many_columns() {
    let column = ColumnDefinition {
        name: "c".to_string(),
        data_type: DataType::Integer,
        data_size: 8,
    };
    let table = TableMetadata {
        name: "wide".to_string(),
        root_page: 2,
        columns: vec![column; MAX_COLUMNS + 1],
    };
    assert!(matches!(
        table.to_bytes().unwrap_err(),
        DatabaseError::InvalidInput { .. }
    ));
}

#[test]
fn test_catalog_entry_round_trip() {
    let entry = CatalogEntry {
        name: "orders".to_string(),
        root_page: 7,
        column_count: 4,
    };
    let bytes = entry.to_bytes().unwrap();
    assert_eq!(CatalogEntry::from_bytes(&bytes).unwrap(), entry);
}

#[test]
fn test_interior_node_round_trip() {
    let mut node = InteriorNode {
        header: PageHeader::new(PageType::Interior),
        key_count: 2,
        keys: [0; MAX_COLUMNS],
        child_pointers: [0; MAX_COLUMNS + 1],
    };
    node.keys[0] = 10;
    node.keys[1] = 20;
    node.child_pointers[0] = 4;
    node.child_pointers[1] = 5;
    node.child_pointers[2] = 6;
    let bytes = node.to_bytes();
    assert_eq!(InteriorNode::from_bytes(&bytes).unwrap(), node);
}

#[test]
fn test_leaf_node_round_trip() {
    let mut node = LeafNode {
        header: PageHeader::new(PageType::Leaf),
        record_count: 1,
        keys: [0; MAX_COLUMNS],
        record_offsets: [0; MAX_COLUMNS],
    };
    node.keys[0] = 77;
    node.record_offsets[0] = 4000;
    let bytes = node.to_bytes();
    assert_eq!(LeafNode::from_bytes(&bytes).unwrap(), node);
}

#[test]
fn test_system_catalog_round_trip() {
    let catalog = SystemCatalog {
        header: PageHeader::new(PageType::Catalog),
        entry_count: 3,
        root_page: 2,
    };
    let bytes = catalog.to_bytes();
    assert_eq!(SystemCatalog::from_bytes(&bytes).unwrap(), catalog);
}

#[test]
fn test_truncated_input_rejected() {
    assert!(PageHeader::from_bytes(&[0u8; 4]).is_err());
    assert!(RecordHeader::from_bytes(&[0u8; 4]).is_err());
    assert!(ColumnDefinition::from_bytes(&[0u8; 10]).is_err());
    assert!(InteriorNode::from_bytes(&[0u8; 100]).is_err());
    assert!(LeafNode::from_bytes(&[0u8; 100]).is_err());
    assert!(SystemCatalog::from_bytes(&[0u8; 10]).is_err());
}
