pub mod timefmt;

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    // Specific errors
    #[error("Placeholder list has odd length ({0}): every token needs a value")]
    OddPlaceholders(usize),

    #[error("Error loading config: {0}")]
    ConfigError(String),

    #[error("Error reading message: {0}")]
    InputError(String),

    // Wrappers for the system errors
    #[error(transparent)]
    IoErr(#[from] io::Error),

    #[error(transparent)]
    SerdeYaml(#[from] serde_yaml::Error),
}
