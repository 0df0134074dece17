use thiserror::Error;

/// Centralized error type for the extractor
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("FTP error: {0}")]
    Ftp(#[from] suppaftp::FtpError),

    #[error("DBF read error: {0}")]
    Dbase(#[from] dbase::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed DBC file: {0}")]
    Dbc(String),

    #[error("Column not found in batch: {0}")]
    ColumnNotFound(String),
}

/// Alias for fallible operations in this crate
pub type ExtractResult<T> = Result<T, ExtractError>;
