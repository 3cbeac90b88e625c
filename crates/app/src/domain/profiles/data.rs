//! Profiles Data

use crate::domain::{departments::records::DepartmentId, profiles::records::SubDepartmentId};

/// Optional filters for a profile search. Absent fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFilter {
    pub name: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub sub_department_id: Option<SubDepartmentId>,
}

impl ProfileFilter {
    /// Name to match, ignoring blank values.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }
}
