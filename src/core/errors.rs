use thiserror::Error;

#[derive(Error, Debug)]
pub enum TangoError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(Box<csv::Error>),

    #[error("word list is missing required columns: {0}")]
    MissingHeader(String),

    #[error("only {available} words match the current filters, need at least 4")]
    InsufficientMaterial { available: usize },

    #[error("Failed to load file: {0}")]
    FailedToLoadFile(String),

    #[error("TangoError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for TangoError {
    fn from(error: std::io::Error) -> Self {
        TangoError::Io(Box::new(error))
    }
}

impl From<csv::Error> for TangoError {
    fn from(error: csv::Error) -> Self {
        TangoError::Csv(Box::new(error))
    }
}
