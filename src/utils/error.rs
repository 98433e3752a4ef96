//! Error types for PlayDeck
//!
//! This module defines custom error types used throughout the crate.
//! We use thiserror for convenient error type definitions and anyhow for
//! application-level error handling in the demo binary.

use thiserror::Error;

/// Main error type for PlayDeck
#[derive(Error, Debug)]
pub enum PlayDeckError {
    /// Playback element errors
    #[error("Media element error: {0}")]
    Media(String),

    /// Control surface errors
    #[error("Control surface error: {0}")]
    Surface(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for Results in PlayDeck
pub type Result<T> = std::result::Result<T, PlayDeckError>;

/// Extension trait for converting other errors to PlayDeckError
pub trait IntoDeckError<T> {
    /// Convert this error into a PlayDeckError with the given context
    fn media_err(self, context: &str) -> Result<T>;
    fn surface_err(self, context: &str) -> Result<T>;
    fn config_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoDeckError<T> for std::result::Result<T, E> {
    fn media_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayDeckError::Media(format!("{}: {}", context, e)))
    }

    fn surface_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayDeckError::Surface(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayDeckError::Config(format!("{}: {}", context, e)))
    }
}
