//! Profile Records

use std::str::FromStr;

use crate::{
    domain::{departments::records::DepartmentId, status::Status},
    ids::TypedId,
};

/// Profile Id
pub type ProfileId = TypedId<ProfileRecord>;

/// Sub-department marker; sub-departments live outside this crate.
#[derive(Debug)]
pub struct SubDepartment;

/// Sub-department Id
pub type SubDepartmentId = TypedId<SubDepartment>;

/// Profile Menu Id
pub type ProfileMenuId = TypedId<ProfileMenuEntry>;

/// Profile Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub id: ProfileId,
    pub name: String,
    pub status: Status,
    pub department_id: DepartmentId,
    pub sub_department_id: SubDepartmentId,
}

/// One active `profile_menu` row assigned to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileMenuEntry {
    pub id: ProfileMenuId,
    pub role_id: i64,
    pub user_menu_id: i64,
}

/// Profile description together with its active menu assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileMenuDetails {
    pub profile_id: ProfileId,
    pub description: Option<String>,
    pub menus: Vec<ProfileMenuEntry>,
}

impl FromStr for ProfileMenuEntry {
    type Err = String;

    /// Parses one `id-role_id-user_menu_id` triple.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('-').map(str::parse::<i64>);

        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(id)), Some(Ok(role_id)), Some(Ok(user_menu_id)), None) => Ok(Self {
                id: ProfileMenuId::from_i64(id),
                role_id,
                user_menu_id,
            }),
            _ => Err(format!("malformed profile menu entry `{s}`")),
        }
    }
}

/// Splits the comma-joined aggregate produced by the profile menu detail query.
pub(crate) fn parse_menu_entries(aggregate: &str) -> Result<Vec<ProfileMenuEntry>, String> {
    aggregate
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(str::parse)
        .collect()
}
