//! Departments Data

use crate::domain::{departments::records::DepartmentId, status::Status};

/// Department Setup Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentSetup {
    pub name: String,
    pub code: String,
    pub status: Status,
}

/// Department Update Data
///
/// Fields left as `None` keep the value currently stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentUpdate {
    pub id: DepartmentId,
    pub name: Option<String>,
    pub code: Option<String>,
    pub status: Option<Status>,
}
