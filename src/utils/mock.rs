use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use tempfile::env::temp_dir;

use crate::storage::storage_manager::StorageManager;

static NEXT_DB_ID: AtomicU64 = AtomicU64::new(0);

pub fn get_unix_timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis()
}

pub fn create_temp_db_path() -> PathBuf {
    create_temp_db_path_with_prefix("lumbung_test")
}

pub fn create_temp_db_path_with_prefix(prefix: &str) -> PathBuf {
    let mut temp_path = temp_dir();
    // Counter keeps parallel tests within one millisecond apart
    temp_path.push(format!(
        "{}_{}_{}_{}.db",
        prefix,
        std::process::id(),
        get_unix_timestamp_millis(),
        NEXT_DB_ID.fetch_add(1, Ordering::Relaxed)
    ));
    temp_path
}

pub struct TempDatabase {
    pub path: PathBuf,
    pub storage_manager: Option<StorageManager>,
}

impl TempDatabase {
    pub fn new() -> Self {
        Self {
            path: create_temp_db_path(),
            storage_manager: None,
        }
    }

    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            path: create_temp_db_path_with_prefix(prefix),
            storage_manager: None,
        }
    }

    pub fn open_storage_manager(
        &mut self,
    ) -> Result<&mut StorageManager, Box<dyn std::error::Error>> {
        let sm = StorageManager::open(&self.path)?;
        self.storage_manager = Some(sm);
        Ok(self.storage_manager.as_mut().unwrap())
    }

    pub fn get_storage_manager(&mut self) -> Option<&mut StorageManager> {
        self.storage_manager.as_mut()
    }
}

impl Default for TempDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempDatabase {
    fn drop(&mut self) {
        self.storage_manager = None;
        if self.path.exists() {
            let _ = fs::remove_file(&self.path);
        }
    }
}
