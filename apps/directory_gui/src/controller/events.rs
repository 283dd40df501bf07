//! UI/backend events, UI intents, and error modeling for the directory GUI controller.

use directory_client::{ClientError, FieldChange};
use shared::domain::{Employee, EmployeeId};

/// Results reported by the backend worker.
#[derive(Debug)]
pub enum UiEvent {
    EmployeesLoaded(Vec<Employee>),
    EmployeeSaved(Employee),
    EmployeeDeleted(EmployeeId),
    Error(UiError),
}

/// Intents collected while drawing a frame, applied once drawing is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    OpenCreateDialog,
    OpenEditDialog(Employee),
    CloseDialog,
    ChangeField(FieldChange),
    Submit,
    OpenDeletePrompt(Employee),
    CloseDeletePrompt,
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Server,
    Malformed,
    Validation,
    /// Failures inside the app itself: the worker runtime or the command queue.
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Load,
    Save,
    Delete,
    CommandQueue,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(
        context: UiErrorContext,
        category: UiErrorCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    pub fn from_client(context: UiErrorContext, err: &ClientError) -> Self {
        let category = match err {
            ClientError::Request { .. } => UiErrorCategory::Transport,
            ClientError::Status { status, .. } if (400..500).contains(status) => {
                UiErrorCategory::Validation
            }
            ClientError::Status { .. } => UiErrorCategory::Server,
            ClientError::Decode { .. } => UiErrorCategory::Malformed,
        };

        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
