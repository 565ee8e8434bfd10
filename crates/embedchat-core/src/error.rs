//! Error types for the embedchat workspace.

use thiserror::Error;

/// A shared error type for every embedchat crate.
///
/// Provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. All user-facing failure
/// text lives in the `Display` output of these variants.
#[derive(Error, Debug, Clone)]
pub enum EmbedChatError {
    /// A precondition on caller-supplied data failed (e.g. blank agent
    /// context, missing identifiers). Reported before any work happens.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend could not be reached, returned a non-success status,
    /// or sent a body we could not parse.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The backend was reachable but reported an application-level failure
    /// (`success: false`).
    #[error("API error: {0}")]
    Api(String),

    /// File-to-text extraction failed (parser failure or backend refusal).
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Uploaded file uses a type we do not know how to extract.
    #[error("Unsupported file type '{extension}'. Supported types are: {supported}")]
    UnsupportedFile {
        extension: String,
        supported: &'static str,
    },

    /// Uploaded file exceeds the extraction size ceiling.
    #[error("File is {size} bytes, which exceeds the {limit_mib} MiB limit")]
    FileTooLarge { size: u64, limit_mib: u64 },

    /// Widget bundle template failed to render.
    #[error("Template error: {0}")]
    Template(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EmbedChatError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates an Api error
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }

    /// Creates an Extraction error
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction(message.into())
    }

    /// Creates a Template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this error came from the file-extraction path
    /// (size guard, type dispatch, or parser failure).
    pub fn is_extraction(&self) -> bool {
        matches!(
            self,
            Self::Extraction(_) | Self::UnsupportedFile { .. } | Self::FileTooLarge { .. }
        )
    }
}

impl From<std::io::Error> for EmbedChatError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for EmbedChatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for EmbedChatError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for EmbedChatError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, EmbedChatError>`.
pub type Result<T> = std::result::Result<T, EmbedChatError>;
