//! Error types for parameter validation and input parsing

use std::io;
use thiserror::Error;

/// Clustering parameters that cannot be used
#[derive(Error, Debug, PartialEq)]
pub enum ParamError {
    #[error("eps must be a non-negative number, got {0}")]
    NegativeEps(f64),

    #[error("minPts must be at least 1, got {0}")]
    MinPoints(usize),
}

/// Errors that can occur while reading input records
#[derive(Error, Debug)]
pub enum InputError {
    #[error("malformed record at line {line}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed CSV record at row {row}: {reason}")]
    MalformedCsv { row: usize, reason: String },

    #[error("CSV error")]
    Csv(#[from] csv::Error),

    #[error("IO error")]
    Io(#[from] io::Error),
}

impl InputError {
    /// True for errors caused by record contents rather than the input stream
    pub fn is_malformed(&self) -> bool {
        match self {
            InputError::Malformed { .. } | InputError::MalformedCsv { .. } => true,
            InputError::Csv(e) => !e.is_io_error(),
            InputError::Io(_) => false,
        }
    }
}
