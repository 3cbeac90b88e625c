//! Department and profile setup services over PostgreSQL.

pub mod config;
pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod observability;

#[cfg(test)]
mod test;
