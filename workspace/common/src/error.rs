use thiserror::Error;

/// Message shown when a submit is attempted without a selected file.
pub const NO_FILE_MESSAGE: &str = "Please select a CSV file.";

/// Message used when a failed response carries no usable `error` field.
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed";

/// Failure of a single upload-and-analyze attempt.
///
/// The `Display` output is exactly the text shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Submit was attempted with no file selected
    #[error("Please select a CSV file.")]
    NoFileSelected,

    /// The service answered with a non-success status
    #[error("{message}")]
    Service { status: u16, message: String },

    /// The service answered with success but the body did not match the result schema
    #[error("Malformed response from analysis service: {0}")]
    MalformedResponse(String),

    /// The HTTP exchange did not complete
    #[error("{0}")]
    Transport(String),
}

/// Coarse classification of [`AnalysisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Service,
    Transport,
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::NoFileSelected => ErrorKind::Validation,
            AnalysisError::Service { .. } | AnalysisError::MalformedResponse(_) => ErrorKind::Service,
            AnalysisError::Transport(_) => ErrorKind::Transport,
        }
    }
}

/// Error raised while resolving client configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid service origin: {0}")]
    InvalidOrigin(String),
}
