//! Department record conversions.
//!
//! Pure helpers used by the service to derive the record it is about to persist.

use crate::domain::{
    departments::{
        data::{DepartmentSetup, DepartmentUpdate},
        records::{DepartmentRecord, NewDepartmentRecord},
    },
    status::Status,
};

/// Copies setup data into a record that storage will assign an id to.
#[must_use]
pub fn to_new_record(setup: DepartmentSetup) -> NewDepartmentRecord {
    NewDepartmentRecord {
        name: setup.name,
        code: setup.code,
        status: setup.status,
    }
}

/// Marks a department inactive, leaving every other field untouched.
#[must_use]
pub fn to_soft_deleted(record: DepartmentRecord) -> DepartmentRecord {
    DepartmentRecord {
        status: Status::Inactive,
        ..record
    }
}

/// Applies the supplied update fields over `existing`.
///
/// Blank strings count as not supplied. The id is always taken from `existing`.
#[must_use]
pub fn to_merged(update: DepartmentUpdate, existing: DepartmentRecord) -> DepartmentRecord {
    DepartmentRecord {
        id: existing.id,
        name: supplied(update.name).unwrap_or(existing.name),
        code: supplied(update.code).unwrap_or(existing.code),
        status: update.status.unwrap_or(existing.status),
    }
}

fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
