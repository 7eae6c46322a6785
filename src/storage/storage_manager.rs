use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use crate::{
    storage::header::HeaderPage,
    types::{MAX_PAGE_COUNT, PAGE_SIZE, PageId, error::DatabaseError},
};

const ZERO_PAGE: [u8; PAGE_SIZE] = [0u8; PAGE_SIZE];

/// Owns the database file and the page address space.
///
/// The file is a sequence of PAGE_SIZE pages; page numbers are zero-based
/// and double as I/O addresses (`page_number * PAGE_SIZE`). Page 0 is
/// permanently the header page and is never handed out by
/// [`allocate_page`](Self::allocate_page).
///
/// Not synchronized: concurrent calls on one manager from multiple
/// threads must be serialized by the caller. The file handle is released
/// on [`close`](Self::close) or on drop, whichever comes first.
#[derive(Debug)]
pub struct StorageManager {
    path: PathBuf,
    file: Option<File>,
    page_count: u64,
}

impl StorageManager {
    /// Opens the database file at `path`, creating it (with a fresh
    /// header page) if it does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        if path.exists() {
            Self::open_existing(path)
        } else {
            Self::create_new(path)
        }
    }

    fn create_new(path: &Path) -> Result<Self, DatabaseError> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(path)?;
        let header = HeaderPage::default();
        file.write_all(&header.to_bytes())?;
        file.sync_all()?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Some(file),
            page_count: 1,
        })
    }

    fn open_existing(path: &Path) -> Result<Self, DatabaseError> {
        let mut file = OpenOptions::new().read(true).write(true).open(path)?;
        let file_size = file.metadata()?.len();
        if file_size == 0 {
            return Err(DatabaseError::Corrupted {
                reason: "file is empty, missing header page".to_string(),
            });
        }
        if file_size % PAGE_SIZE as u64 != 0 {
            return Err(DatabaseError::Corrupted {
                reason: format!(
                    "file size {} is not a multiple of the page size {}",
                    file_size, PAGE_SIZE
                ),
            });
        }
        let mut header_buffer = vec![0u8; PAGE_SIZE];
        file.seek(SeekFrom::Start(0))?;
        file.read_exact(&mut header_buffer)?;
        HeaderPage::from_bytes(&header_buffer)?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Some(file),
            page_count: file_size / PAGE_SIZE as u64,
        })
    }

    /// Releases the file handle after a final sync. Safe to call more
    /// than once; operations after close fail with `InvalidInput`.
    pub fn close(&mut self) -> Result<(), DatabaseError> {
        if let Some(file) = self.file.take() {
            file.sync_all()?;
        }
        Ok(())
    }

    /// Copies page `page_number` into `buffer[..PAGE_SIZE]`.
    pub fn read_page(&mut self, page_number: PageId, buffer: &mut [u8]) -> Result<(), DatabaseError> {
        if buffer.len() < PAGE_SIZE {
            return Err(DatabaseError::InvalidInput {
                reason: format!(
                    "read buffer holds {} bytes, need at least {}",
                    buffer.len(),
                    PAGE_SIZE
                ),
            });
        }
        self.check_page_number(page_number)?;
        let offset = page_number * PAGE_SIZE as u64;
        let file = self.file_mut()?;
        file.seek(SeekFrom::Start(offset))?;
        file.read_exact(&mut buffer[..PAGE_SIZE])?;
        Ok(())
    }

    /// Overwrites page `page_number` with `buffer` and forces the write
    /// to durable storage. Never extends the file; growing the page
    /// address space is [`allocate_page`](Self::allocate_page)'s job.
    pub fn write_page(&mut self, page_number: PageId, buffer: &[u8]) -> Result<(), DatabaseError> {
        if buffer.len() != PAGE_SIZE {
            return Err(DatabaseError::InvalidInput {
                reason: format!(
                    "write buffer holds {} bytes, need exactly {}",
                    buffer.len(),
                    PAGE_SIZE
                ),
            });
        }
        self.check_page_number(page_number)?;
        let offset = page_number * PAGE_SIZE as u64;
        let file = self.file_mut()?;
        file.seek(SeekFrom::Start(offset))?;
        file.write_all(buffer)?;
        file.sync_all()?;
        Ok(())
    }

    /// Appends one zero-filled page and returns its page number. The
    /// page count is incremented only after the append is durable, so a
    /// failed allocation leaves the manager state unchanged.
    pub fn allocate_page(&mut self) -> Result<PageId, DatabaseError> {
        if self.page_count >= MAX_PAGE_COUNT {
            return Err(DatabaseError::AllocationFailure {
                reason: format!("page count limit {} reached", MAX_PAGE_COUNT),
            });
        }
        let page_number = self.page_count;
        let offset = page_number * PAGE_SIZE as u64;
        let file = self.file_mut()?;
        file.seek(SeekFrom::Start(offset))?;
        file.write_all(&ZERO_PAGE)?;
        file.sync_all()?;
        self.page_count += 1;
        Ok(page_number)
    }

    /// Validates `page_number` and returns. Reclamation is pending a
    /// free-list; freed pages stay allocated on disk and are not reused.
    pub fn free_page(&mut self, page_number: PageId) -> Result<(), DatabaseError> {
        self.file_mut()?;
        self.check_page_number(page_number)?;
        Ok(())
    }

    pub fn page_count(&self) -> u64 {
        self.page_count
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn check_page_number(&self, page_number: PageId) -> Result<(), DatabaseError> {
        if page_number >= self.page_count {
            return Err(DatabaseError::InvalidInput {
                reason: format!(
                    "page {} out of range (page count {})",
                    page_number, self.page_count
                ),
            });
        }
        Ok(())
    }

    fn file_mut(&mut self) -> Result<&mut File, DatabaseError> {
        self.file.as_mut().ok_or_else(|| DatabaseError::InvalidInput {
            reason: "storage manager is closed".to_string(),
        })
    }
}
