use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type StatsResult<T> = Result<T, StatsError>;
