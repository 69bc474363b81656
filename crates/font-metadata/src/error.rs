//! Error types for metadata application.

use std::{io, result};

/// Errors that can occur while applying metadata to a font.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write to console: {0}")]
    Console(#[from] io::Error),

    #[error("unsupported name table locale: {0}")]
    UnsupportedLocale(String),
}

pub type Result<T> = result::Result<T, Error>;
