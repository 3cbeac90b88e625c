//! Shared test infrastructure


pub(crate) use db::TestDb;
