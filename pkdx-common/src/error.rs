//! Common error types for PKDX

use thiserror::Error;

/// Common result type for PKDX operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across PKDX services
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
