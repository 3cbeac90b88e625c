//! Organization Domain Concerns

pub mod departments;
pub mod profiles;
pub mod status;
