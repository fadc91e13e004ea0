//! Unified library error.

use thiserror::Error;

use super::OpenError;

#[derive(Debug, Error)]
pub enum FolioError {
    /// Terminal setup, drawing, teardown or stdout writes failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON export could not be produced.
    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),

    #[error(transparent)]
    Open(#[from] OpenError),

    /// Logging could not be initialized.
    #[error("logging setup failed: {message}")]
    Logging { message: String },

    /// An error with the operation that produced it.
    #[error("{operation}: {error}")]
    WithContext {
        operation: String,
        #[source]
        error: Box<FolioError>,
    },
}

impl FolioError {
    /// Message suitable for a notice or a one-line stderr report.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::Io(_) => {
                "The terminal could not be used. Check that folio runs in an interactive terminal."
                    .to_string()
            }
            FolioError::Export(_) => "Could not export the portfolio.".to_string(),
            FolioError::Open(err) => err.user_message(),
            FolioError::Logging { .. } => "Logging is unavailable.".to_string(),
            FolioError::WithContext { error, .. } => error.user_message(),
        }
    }

    pub fn with_operation(self, operation: impl Into<String>) -> Self {
        FolioError::WithContext {
            operation: operation.into(),
            error: Box::new(self),
        }
    }
}
