//! Custom error types for milvus-shell
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// A statement matched a known verb but its clauses are malformed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The verb requires a `where` clause that is absent
    #[error("expected a 'where' clause in: {0}")]
    MissingWhere(String),

    /// A clause has no `=` separator
    #[error("malformed clause '{0}': expected key=value")]
    MissingAssignment(String),

    /// A clause key is not one the verb accepts
    #[error("unknown parameter '{0}'")]
    UnknownKey(String),

    /// The same key was given twice
    #[error("parameter '{0}' given more than once")]
    DuplicateKey(String),

    /// A required parameter is absent
    #[error("missing parameter '{0}'")]
    MissingParameter(&'static str),

    /// An integer parameter could not be parsed
    #[error("invalid integer for '{key}': '{value}'")]
    InvalidInteger { key: &'static str, value: String },

    /// A metric type is not in the metric table
    #[error("unknown metric_type '{0}'")]
    UnknownMetricType(String),

    /// An index type is not in the index table
    #[error("unknown index_type '{0}'")]
    UnknownIndexType(String),
}

/// Main error type for milvus-shell operations
#[derive(Error, Debug)]
pub enum ShellError {
    /// Statement parse errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Errors reported by the database client or server
    #[error("Milvus error: {0}")]
    Client(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed server URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for milvus-shell operations
pub type Result<T> = std::result::Result<T, ShellError>;

impl ShellError {
    /// Create a client error
    pub fn client(msg: impl Into<String>) -> Self {
        Self::Client(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error came from parsing rather than from the server
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
