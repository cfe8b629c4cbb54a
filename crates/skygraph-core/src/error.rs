//! Error types for skygraph-core

use thiserror::Error;

/// Result type alias for skygraph-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in skygraph-core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file could not be found
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse YAML configuration
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Invalid configuration value
    #[error("invalid configuration: {message}")]
    ConfigInvalid {
        /// Description of what's invalid
        message: String,
    },

    /// A culture's index document could not be interpreted at all
    #[error("invalid index document for culture '{culture}': {message}")]
    InvalidIndex {
        /// Culture key
        culture: String,
        /// Description of the problem
        message: String,
    },

    /// A single constellation record is missing a field or is malformed
    #[error("invalid constellation #{index} in culture '{culture}': {message}")]
    InvalidConstellation {
        /// Culture key
        culture: String,
        /// Position of the record in the `constellations` array
        index: usize,
        /// Description of the problem
        message: String,
    },

    /// A star catalog row could not be converted
    #[error("invalid catalog row {line}: {message}")]
    InvalidCatalogRow {
        /// 1-based line number in the catalog file
        line: u64,
        /// Description of the problem
        message: String,
    },

    /// Star name lookup failed
    #[error("name lookup for HIP {hip} failed: {message}")]
    Lookup {
        /// Star identifier
        hip: String,
        /// Description of the failure
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reading error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
