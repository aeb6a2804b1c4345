use thiserror::Error;

/// Run-level failures. Any of these aborts the command.
#[derive(Error, Debug)]
pub enum CmError {
    #[error("Config error: {0}")]
    Config(String),

    #[error(
        "Missing required parameters: {}. Provide them via command line or config file.",
        .fields.join(", ")
    )]
    MissingCredentials { fields: Vec<String> },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid import file: {0}")]
    InvalidImportFile(String),

    #[error("Export failed: {cause}")]
    ExportFailed { cause: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CmError {
    pub fn export_failed(cause: impl ToString) -> Self {
        Self::ExportFailed {
            cause: cause.to_string(),
        }
    }
}

/// Errors raised by a single platform call.
///
/// The platform reports most refusals as HTTP statuses with a free-text
/// body, so only the common ones get their own variant. Everything else
/// keeps the original message for text-based classification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("403 Forbidden: {0}")]
    Forbidden(String),

    #[error("404 Not Found: {0}")]
    NotFound(String),

    #[error("banned: {0}")]
    Banned(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("{0}")]
    Other(String),
}
