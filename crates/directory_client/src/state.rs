//! Directory view state: the loaded records plus the add/edit form and the delete prompt.
//!
//! Every transition here is synchronous and does no I/O. Callers perform the HTTP request
//! and report the outcome back; a successful mutation hands out a [`Resync`] that must be
//! spent on a full reload of the collection.

use chrono::NaiveDate;
use shared::{
    domain::{Employee, EmployeeId},
    protocol::EmployeePayload,
};

use crate::draft::{DraftError, EmployeeDraft, FieldChange};

/// What a submit of the current draft sends to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(EmployeePayload),
    Update {
        id: EmployeeId,
        payload: EmployeePayload,
    },
}

impl SubmitRequest {
    pub fn method(&self) -> &'static str {
        match self {
            SubmitRequest::Create(_) => "POST",
            SubmitRequest::Update { .. } => "PUT",
        }
    }

    pub fn payload(&self) -> &EmployeePayload {
        match self {
            SubmitRequest::Create(payload) | SubmitRequest::Update { payload, .. } => payload,
        }
    }
}

/// Proof that a mutation succeeded and the local list is stale.
#[must_use = "a successful mutation must be followed by a reload of the collection"]
#[derive(Debug, PartialEq, Eq)]
pub struct Resync {
    _private: (),
}

#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    employees: Vec<Employee>,
    form_open: bool,
    draft: EmployeeDraft,
    editing_id: Option<EmployeeId>,
    delete_open: bool,
    delete_candidate: Option<Employee>,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    pub fn form_open(&self) -> bool {
        self.form_open
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn editing_id(&self) -> Option<EmployeeId> {
        self.editing_id
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn delete_open(&self) -> bool {
        self.delete_open
    }

    pub fn delete_candidate(&self) -> Option<&Employee> {
        self.delete_candidate.as_ref()
    }

    /// Replaces the list with the result of a successful fetch.
    pub fn apply_loaded(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
    }

    pub fn open_create_dialog(&mut self) {
        self.draft = EmployeeDraft::default();
        self.editing_id = None;
        self.form_open = true;
    }

    pub fn open_edit_dialog(&mut self, employee: &Employee) {
        self.draft = EmployeeDraft::from_employee(employee);
        self.editing_id = Some(employee.id);
        self.form_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.form_open = false;
        self.draft = EmployeeDraft::default();
        self.editing_id = None;
    }

    pub fn change_field(&mut self, change: FieldChange, today: NaiveDate) {
        self.draft.apply(change, today);
    }

    pub fn prepare_submit(&self) -> Result<SubmitRequest, DraftError> {
        let payload = self.draft.to_payload()?;
        Ok(match self.editing_id {
            Some(id) => SubmitRequest::Update { id, payload },
            None => SubmitRequest::Create(payload),
        })
    }

    pub fn submit_succeeded(&mut self) -> Resync {
        self.close_dialog();
        Resync { _private: () }
    }

    pub fn open_delete_prompt(&mut self, employee: &Employee) {
        self.delete_candidate = Some(employee.clone());
        self.delete_open = true;
    }

    pub fn close_delete_prompt(&mut self) {
        self.delete_open = false;
        self.delete_candidate = None;
    }

    /// Record the open prompt is asking about, if any.
    pub fn delete_target(&self) -> Option<EmployeeId> {
        if !self.delete_open {
            return None;
        }
        self.delete_candidate.as_ref().map(|employee| employee.id)
    }

    pub fn delete_succeeded(&mut self) -> Resync {
        self.close_delete_prompt();
        Resync { _private: () }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
