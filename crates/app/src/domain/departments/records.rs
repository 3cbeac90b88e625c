//! Department Records

use crate::{domain::status::Status, ids::TypedId};

/// Department Id
pub type DepartmentId = TypedId<DepartmentRecord>;

/// Department Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRecord {
    /// Storage-assigned identifier.
    pub id: DepartmentId,

    /// Unique department name.
    pub name: String,

    /// Unique short code.
    pub code: String,

    /// Active/inactive flag.
    pub status: Status,
}

/// Department record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartmentRecord {
    pub name: String,
    pub code: String,
    pub status: Status,
}
