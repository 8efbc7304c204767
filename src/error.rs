//! Error handling for wordlist-forge


use thiserror::Error;

/// Main error type for wordlist-forge
#[derive(Error, Debug, Clone)]
pub enum WordlistError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Capacity exceeded: generation would produce up to {estimated} entries (limit {limit})")]
    CapacityExceeded { estimated: u128, limit: u64 },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Prompt error: {message}")]
    Prompt { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl WordlistError {
    /// Create a validation (invalid configuration) error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create a capacity error
    pub fn capacity(estimated: u128, limit: u64) -> Self {
        Self::CapacityExceeded { estimated, limit }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Whether the error was raised before any generation work started
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfiguration { .. } | Self::CapacityExceeded { .. }
        )
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidConfiguration { message } => {
                format!("❌ Invalid configuration: {}\n💡 Check your input format", message)
            }
            Self::CapacityExceeded { estimated, limit } => {
                format!(
                    "❌ Too many combinations: up to {} entries, limit is {}\n💡 Use a shorter base word, a narrower year range, or raise WORDLIST_MAX_ENTRIES",
                    estimated, limit
                )
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or configuration", message)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 Check the JSON run file", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Prompt { message } => {
                format!("❌ Input aborted: {}", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

/// Convert from common error types
impl From<serde_json::Error> for WordlistError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for WordlistError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<inquire::InquireError> for WordlistError {
    fn from(err: inquire::InquireError) -> Self {
        Self::prompt(err.to_string())
    }
}

impl From<tokio::task::JoinError> for WordlistError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("generation task failed: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordlistError>;



/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::WordlistError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordlistError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::WordlistError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordlistError::validation(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message_mentions_limit() {
        let err = WordlistError::capacity(1_000_000, 10);
        assert!(err.to_string().contains("1000000"));
        assert!(err.user_message().contains("WORDLIST_MAX_ENTRIES"));
        assert!(err.is_rejection());
    }

    #[test]
    fn test_macros() {
        let err = validation_error!("year {} is out of range", 12345);
        assert!(matches!(err, WordlistError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("12345"));

        let err = config_error!("bad value");
        assert!(!err.is_rejection());
    }
}
