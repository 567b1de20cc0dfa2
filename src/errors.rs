// src/errors.rs

//! Crate-wide error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unable to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("the process '{program}' failed with exit code {code}")]
    ProcessFailed { program: String, code: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ActionError>;
