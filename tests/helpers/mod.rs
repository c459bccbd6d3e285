// Test helpers shared by contract and integration tests
//
// Service-level tests run against the in-memory store. MySQL-backed tests
// read TEST_DATABASE_URL and are ignored by default.
#![allow(dead_code)]

pub mod test_data;
pub mod test_database;

pub use test_data::*;
pub use test_database::*;
