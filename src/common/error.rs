//! Error types for drone_log_tools

use thiserror::Error;

/// Main error type for the log tools
#[derive(Error, Debug)]
pub enum ToolError {
    /// I/O error (missing input, failed delete, socket failure)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed log row
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Log without any samples
    #[error("Empty log: {0}")]
    EmptyLog(String),

    /// Visualization error
    #[error("Visualization error: {0}")]
    Visualization(String),

    /// PDF merge error
    #[error("Merge error: {0}")]
    Merge(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Operation called in the wrong lifecycle state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Interrupt handler could not be installed
    #[error("Signal error: {0}")]
    Signal(String),
}

impl ToolError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        ToolError::Parse {
            line,
            message: message.into(),
        }
    }
}

impl From<lopdf::Error> for ToolError {
    fn from(e: lopdf::Error) -> Self {
        ToolError::Merge(e.to_string())
    }
}

impl From<toml::de::Error> for ToolError {
    fn from(e: toml::de::Error) -> Self {
        ToolError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        ToolError::Io(e.into())
    }
}

impl From<ctrlc::Error> for ToolError {
    fn from(e: ctrlc::Error) -> Self {
        ToolError::Signal(e.to_string())
    }
}

/// Result type alias for tool operations
pub type ToolResult<T> = Result<T, ToolError>;
