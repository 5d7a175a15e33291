use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for yaml-bump operations
#[derive(Error, Debug)]
pub enum YamlBumpError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in yaml-bump
pub type Result<T> = std::result::Result<T, YamlBumpError>;

impl YamlBumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        YamlBumpError::Config(msg.into())
    }

    /// Whether this error should end the process with the "file not found" exit status
    pub fn is_not_found(&self) -> bool {
        matches!(self, YamlBumpError::FileNotFound(_))
    }
}
