use thiserror::Error;

use crate::types::Field;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Please upload at least 1 CSV file.")]
    NoInput,

    #[error("Please upload maximum {max} files (got {count})", max = crate::loader::MAX_INPUTS)]
    TooManyInputs { count: usize },

    #[error("{input} is not valid CSV: {source}")]
    Malformed {
        input: String,
        #[source]
        source: csv::Error,
    },

    #[error("{input} has no rows")]
    EmptyInput { input: String },

    #[error("Header row not found. Cleaning cannot proceed.")]
    HeaderNotFound,

    #[error("header row has no column matching {field}")]
    MissingColumn { field: Field },

    #[error("access denied: session is not authenticated")]
    NotAuthenticated,

    #[error("writing cleaned CSV failed: {0}")]
    Write(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CleanError>;
