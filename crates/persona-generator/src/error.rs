//! Error types for the generator

use thiserror::Error;

/// Errors that can occur while generating a persona
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Writing the persona file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid generator configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
