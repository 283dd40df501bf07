//! The unsaved copy of a record shown in the add/edit form.

use chrono::NaiveDate;
use shared::{
    domain::{age_in_years, Employee, Gender},
    protocol::EmployeePayload,
};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    /// Derived from `dob`; the form never edits it directly.
    pub age: Option<i32>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub department: String,
}

/// A single-field edit merged into the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Name(String),
    DateOfBirth(Option<NaiveDate>),
    Gender(Gender),
    Department(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("date of birth is required")]
    MissingDateOfBirth,
    #[error("gender is required")]
    MissingGender,
    #[error("age is unknown")]
    MissingAge,
}

impl EmployeeDraft {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            age: Some(employee.age),
            dob: Some(employee.dob),
            gender: Some(employee.gender),
            department: employee.department.clone(),
        }
    }

    pub fn apply(&mut self, change: FieldChange, today: NaiveDate) {
        match change {
            FieldChange::Name(name) => self.name = name,
            FieldChange::DateOfBirth(dob) => {
                self.dob = dob;
                self.age = dob.map(|dob| age_in_years(dob, today));
            }
            FieldChange::Gender(gender) => self.gender = Some(gender),
            FieldChange::Department(department) => self.department = department,
        }
    }

    pub fn to_payload(&self) -> Result<EmployeePayload, DraftError> {
        let dob = self.dob.ok_or(DraftError::MissingDateOfBirth)?;
        let gender = self.gender.ok_or(DraftError::MissingGender)?;
        let age = self.age.ok_or(DraftError::MissingAge)?;
        Ok(EmployeePayload {
            name: self.name.clone(),
            age,
            dob,
            gender,
            department: self.department.clone(),
        })
    }
}
