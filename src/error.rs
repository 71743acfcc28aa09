use csv_table::CsvError;
use thiserror::Error;

use crate::host::HostError;
use crate::session::SessionState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {operation} while the session is {state}")]
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },

    #[error("credential was rejected: {message}")]
    Auth { message: String },

    #[error("resource not found: {message}")]
    NotFound { message: String },

    #[error("write conflict: {message}")]
    Conflict { message: String },

    #[error("transport failure: {message}")]
    Transport { message: String },

    #[error("malformed remote payload: {message}")]
    Payload { message: String },

    #[error(transparent)]
    Parse(#[from] CsvError),

    #[error("no content hash is held for the loaded file")]
    MissingContentHash,

    #[error("loaded file has no tabular content to edit")]
    NotEditable,
}

impl SessionError {
    #[must_use]
    pub fn invalid_state(operation: &'static str, state: SessionState) -> Self {
        Self::InvalidState { operation, state }
    }
}

impl From<HostError> for SessionError {
    fn from(error: HostError) -> Self {
        match error {
            HostError::Auth(message) => Self::Auth { message },
            HostError::NotFound(message) => Self::NotFound { message },
            HostError::Conflict(message) => Self::Conflict { message },
            HostError::Transport(message) => Self::Transport { message },
            HostError::Payload(message) => Self::Payload { message },
        }
    }
}
