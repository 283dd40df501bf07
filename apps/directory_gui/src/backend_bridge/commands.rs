//! Backend commands queued from UI to backend worker.

use directory_client::SubmitRequest;
use shared::{domain::EmployeeId, protocol::EmployeePayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LoadEmployees,
    CreateEmployee {
        payload: EmployeePayload,
    },
    UpdateEmployee {
        id: EmployeeId,
        payload: EmployeePayload,
    },
    DeleteEmployee {
        id: EmployeeId,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadEmployees => "load_employees",
            BackendCommand::CreateEmployee { .. } => "create_employee",
            BackendCommand::UpdateEmployee { .. } => "update_employee",
            BackendCommand::DeleteEmployee { .. } => "delete_employee",
        }
    }
}

impl From<SubmitRequest> for BackendCommand {
    fn from(request: SubmitRequest) -> Self {
        match request {
            SubmitRequest::Create(payload) => BackendCommand::CreateEmployee { payload },
            SubmitRequest::Update { id, payload } => BackendCommand::UpdateEmployee { id, payload },
        }
    }
}
