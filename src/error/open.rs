//! Failures of the open-external-resource seam.

use thiserror::Error;

use crate::traits::OpenAction;

/// Why a URI could not be handed off.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The platform has no handler for this URI.
    #[error("no handler for {uri}")]
    Unsupported { uri: String },

    /// A handler exists but launching it failed.
    #[error("failed to open {uri}: {source}")]
    Failed {
        uri: String,
        action: OpenAction,
        #[source]
        source: std::io::Error,
    },
}

impl OpenError {
    /// Text of the notice shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            OpenError::Unsupported { .. } => "Unable to open the link".to_string(),
            OpenError::Failed { action, .. } => action.failure_message().to_string(),
        }
    }
}
