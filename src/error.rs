use thiserror::Error;

pub type Result<T> = std::result::Result<T, MongenError>;

#[derive(Error, Debug)]
pub enum MongenError {
    // Standard library errors with automatic conversion
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // Host metadata accessor is not present on this host generation;
    // the resolver recovers from this one variant by falling back.
    #[error("unsupported host API: {0}")]
    UnsupportedApi(String),

    // Accessor present but unusable; never recovered.
    #[error("could not resolve application name: {0}")]
    Resolve(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("internal error: {0}")]
    Internal(String),
}

// Additional From implementations for common error types
impl From<&str> for MongenError {
    fn from(msg: &str) -> Self {
        MongenError::Internal(msg.to_string())
    }
}

impl From<String> for MongenError {
    fn from(msg: String) -> Self {
        MongenError::Internal(msg)
    }
}

// Convert from anyhow::Error for CLI integration
impl From<anyhow::Error> for MongenError {
    fn from(err: anyhow::Error) -> Self {
        MongenError::Internal(err.to_string())
    }
}
