use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Roster must contain exactly 10 teams, found {found}")]
    RosterShapeError { found: usize },

    #[error("Town {town} needs at least 2 teams, found {count}")]
    TownCompositionError { town: String, count: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, FixtureError>;
