use std::io;

use guardvault_core::errors::Error as CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
    /// Stdin reached end of file; the session ends normally
    #[error("Input stream closed")]
    InputClosed,
    #[error("{0}")]
    Core(#[from] CoreError),
}

pub type CliResult<T> = Result<T, CliError>;
