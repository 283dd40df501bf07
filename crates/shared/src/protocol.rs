use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{wire_date, Employee, Gender};

/// Request body for `POST /employees/` and `PUT /employees/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub name: String,
    pub age: i32,
    #[serde(with = "wire_date")]
    pub dob: NaiveDate,
    pub gender: Gender,
    pub department: String,
}

impl From<&Employee> for EmployeePayload {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            age: employee.age,
            dob: employee.dob,
            gender: employee.gender,
            department: employee.department.clone(),
        }
    }
}

impl EmployeePayload {
    pub fn into_employee(self, id: crate::domain::EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            age: self.age,
            dob: self.dob,
            gender: self.gender,
            department: self.department,
        }
    }
}

/// Body of `GET /employees/`.
///
/// A server that skips response validation reports an empty table as
/// `{"message": "No employees found"}` instead of `[]`. One that validates against a list
/// schema turns that reply into a 500, which surfaces as a failed load instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeListing {
    Records(Vec<Employee>),
    Empty { message: String },
}

impl EmployeeListing {
    pub fn into_records(self) -> Vec<Employee> {
        match self {
            EmployeeListing::Records(records) => records,
            EmployeeListing::Empty { .. } => Vec::new(),
        }
    }
}
