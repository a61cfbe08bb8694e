use thiserror::Error;

/// Errors that can occur while reading or editing the keyword store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("The keyword {0:?} is reserved for internal use")]
    ReservedKeyword(String),

    #[error("Keyword must not be empty")]
    EmptyKeyword,

    #[error("Destination for keyword {0:?} must not be empty")]
    EmptyDestination(String),

    #[error("Store file version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u8, supported: u8 },

    #[error("Failed to access store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed store file: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
