use shared::domain::EmployeeId;
use thiserror::Error;

use crate::draft::DraftError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{method} {url} failed: {source}")]
    Request {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} {url} returned HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        detail: Option<String>,
    },
    #[error("{method} {url} returned a malformed body: {source}")]
    Decode {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Failures of a controller operation driven through [`crate::DirectorySession`].
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("draft is incomplete: {0}")]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("no employee is selected for deletion")]
    NoDeleteTarget,
    #[error("employee {0} is not in the loaded directory")]
    UnknownEmployee(EmployeeId),
}
