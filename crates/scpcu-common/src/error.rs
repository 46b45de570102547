//! Application-wide error type.

/// Common result type for the workspace.
pub type Result<T> = std::result::Result<T, ScpError>;

/// Errors raised while loading files or talking to the platform.
#[derive(thiserror::Error, Debug)]
pub enum ScpError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScpError {
    /// Returns true if the error came from the filesystem.
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns true if the error came from decoding JSON.
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let err: ScpError = io::Error::new(io::ErrorKind::NotFound, "scpcu_config.json").into();
        assert!(err.is_io());
        assert!(!err.is_serialization());
        assert_eq!(err.to_string(), "I/O error: scpcu_config.json");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ScpError = json_err.into();
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("Serialization error: "));
    }

    #[test]
    fn test_config_error_display() {
        let err = ScpError::Config("missing key `token`".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing key `token`");
    }
}
