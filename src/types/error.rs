use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupted database file: {reason}")]
    Corrupted { reason: String },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Page allocation failure: {reason}")]
    AllocationFailure { reason: String },
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
