//! Process exit codes
//!
//! - `0`: success
//! - `1`: general error (output could not be written)
//! - `2`: invalid clustering parameters
//! - `4`: malformed input record
//! - `5`: input could not be read

use crate::error::{InputError, ParamError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidParams = 2,
    ParseError = 4,
    IoError = 5,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

impl ExitCode {
    /// Picks the exit code for a failed run from the root of its error chain
    pub fn from_error(err: &anyhow::Error) -> Self {
        if err.downcast_ref::<ParamError>().is_some() {
            return ExitCode::InvalidParams;
        }
        match err.downcast_ref::<InputError>() {
            Some(e) if e.is_malformed() => ExitCode::ParseError,
            Some(_) => ExitCode::IoError,
            None => ExitCode::GeneralError,
        }
    }
}
