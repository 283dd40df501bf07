use shared::domain::{Employee, EmployeeId};
use tracing::{error, info, warn};

use crate::{
    error::{ClientError, SessionError},
    state::{DirectoryState, Resync, SubmitRequest},
    EmployeeApi,
};

/// Drives [`DirectoryState`] transitions against an [`EmployeeApi`].
///
/// Failures are logged here where they happen and also returned, so a caller may ignore
/// them the way the directory view does or turn them into an exit status.
pub struct DirectorySession<A> {
    api: A,
    state: DirectoryState,
}

impl<A: EmployeeApi> DirectorySession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: DirectoryState::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DirectoryState {
        &mut self.state
    }

    pub async fn load(&mut self) -> Result<usize, ClientError> {
        match self.api.list_employees().await {
            Ok(employees) => {
                let count = employees.len();
                self.state.apply_loaded(employees);
                info!(count, "loaded employee directory");
                Ok(count)
            }
            Err(err) => {
                error!(error = %err, "error fetching employees");
                Err(err)
            }
        }
    }

    pub async fn resync(&mut self, _resync: Resync) -> Result<usize, ClientError> {
        self.load().await
    }

    /// Sends the draft. On success the dialog is closed and the collection reloaded; a
    /// failed reload after that is only logged.
    pub async fn submit(&mut self) -> Result<Employee, SessionError> {
        let request = match self.state.prepare_submit() {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "not submitting incomplete employee draft");
                return Err(err.into());
            }
        };

        let result = match &request {
            SubmitRequest::Create(payload) => self.api.create_employee(payload).await,
            SubmitRequest::Update { id, payload } => self.api.update_employee(*id, payload).await,
        };

        match result {
            Ok(saved) => {
                info!(
                    method = request.method(),
                    employee_id = %saved.id,
                    "saved employee"
                );
                let resync = self.state.submit_succeeded();
                let _ = self.resync(resync).await;
                Ok(saved)
            }
            Err(err) => {
                error!(method = request.method(), error = %err, "error saving employee");
                Err(err.into())
            }
        }
    }

    pub async fn confirm_delete(&mut self) -> Result<EmployeeId, SessionError> {
        let Some(id) = self.state.delete_target() else {
            warn!("delete confirmed without a selected employee");
            return Err(SessionError::NoDeleteTarget);
        };

        match self.api.delete_employee(id).await {
            Ok(()) => {
                info!(employee_id = %id, "deleted employee");
                let resync = self.state.delete_succeeded();
                let _ = self.resync(resync).await;
                Ok(id)
            }
            Err(err) => {
                error!(employee_id = %id, error = %err, "error deleting employee");
                Err(err.into())
            }
        }
    }

    /// Opens the edit dialog for a record that must already be in the loaded list.
    pub fn edit(&mut self, id: EmployeeId) -> Result<(), SessionError> {
        let employee = self
            .state
            .find(id)
            .cloned()
            .ok_or(SessionError::UnknownEmployee(id))?;
        self.state.open_edit_dialog(&employee);
        Ok(())
    }

    /// Opens the delete prompt for a record that must already be in the loaded list.
    pub fn select_for_delete(&mut self, id: EmployeeId) -> Result<(), SessionError> {
        let employee = self
            .state
            .find(id)
            .cloned()
            .ok_or(SessionError::UnknownEmployee(id))?;
        self.state.open_delete_prompt(&employee);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
