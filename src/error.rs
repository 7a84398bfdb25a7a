use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV file has no header row")]
    EmptyCsv,

    #[error("Missing CSV columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("No record with id {0}")]
    UnknownRecord(u32),

    #[error("Unknown status: {0} (expected: active, warning, stopped)")]
    UnknownStatus(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MonitorError>;
