use thiserror::Error;

#[derive(Error, Debug)]
pub enum GsheetError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Read error: {0}")]
    Read(String),

    #[error("Unexpected cell content: {0}")]
    Schema(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Invalid cell reference: {0}")]
    InvalidCell(String),

    #[error("Invalid endpoint: {0}")]
    Endpoint(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GsheetError>;
