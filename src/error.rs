use thiserror::Error;

/// Errors raised by the pattern examples.
///
/// Every variant is a local illegal-argument or illegal-state signal; nothing
/// here is retried.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("token should be not null")]
    MissingToken,

    #[error("unsupported car type: '{0}'")]
    UnsupportedCarType(String),

    #[error("no factory for plant type {0}")]
    UnsupportedPlant(&'static str),

    #[error("unknown country: '{0}'")]
    UnknownCountry(String),

    #[error("incorrect password, access denied")]
    AccessDenied,

    #[error("no snapshot at index {index} (saved: {len})")]
    SnapshotNotFound { index: usize, len: usize },

    #[error("chat mediator is no longer alive")]
    MediatorDropped,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store format error: {0}")]
    StoreFormat(String),
}

impl From<toml::de::Error> for PatternError {
    fn from(err: toml::de::Error) -> Self {
        PatternError::StoreFormat(err.to_string())
    }
}

impl From<toml::ser::Error> for PatternError {
    fn from(err: toml::ser::Error) -> Self {
        PatternError::StoreFormat(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
