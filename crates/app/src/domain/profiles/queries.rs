//! Profile query builders.
//!
//! Both builders only assemble SQL; every filter value travels as a bound
//! parameter.

use sqlx::{Postgres, QueryBuilder};

use crate::domain::{
    profiles::{data::ProfileFilter, records::ProfileId},
    status::Status,
};

const SEARCH_PROFILES_SQL: &str = "SELECT p.id, p.name, p.status, p.department_id, p.sub_department_id \
     FROM profile p \
     WHERE p.id != 0";

const PROFILE_MENU_DETAILS_SQL: &str = "SELECT string_agg(concat(pm.id, '-', pm.role_id, '-', pm.user_menu_id), ',' ORDER BY pm.id) \
     AS profile_menu_details, p.description \
     FROM profile p \
     LEFT JOIN profile_menu pm ON p.id = pm.profile_id \
     WHERE p.id = ";

/// Builds the profile search, narrowing by each filter field that is present.
#[must_use]
pub fn profile_search_query(filter: &ProfileFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SEARCH_PROFILES_SQL);

    if let Some(name) = filter.name() {
        builder.push(" AND p.name = ").push_bind(name.to_owned());
    }

    if let Some(department_id) = filter.department_id {
        builder
            .push(" AND p.department_id = ")
            .push_bind(department_id.into_i64());
    }

    if let Some(sub_department_id) = filter.sub_department_id {
        builder
            .push(" AND p.sub_department_id = ")
            .push_bind(sub_department_id.into_i64());
    }

    builder.push(" ORDER BY p.id DESC");

    builder
}

/// Builds the lookup of a profile's description and its active menu triples,
/// aggregated as comma-joined `id-role_id-user_menu_id` values.
#[must_use]
pub fn profile_menu_detail_query(profile_id: ProfileId) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(PROFILE_MENU_DETAILS_SQL);

    builder
        .push_bind(profile_id.into_i64())
        .push(" AND pm.status = ")
        .push_bind(Status::Active.as_str())
        .push(" GROUP BY p.id");

    builder
}
