// Test Helper Modules
//
// Shared by the unit, contract and integration test targets. Include with:
//
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//
// Contract and unit tests run against the in-memory store. Integration tests
// hit a real MySQL database and are #[ignore]d unless TEST_DATABASE_URL points
// at a disposable schema.

#![allow(dead_code)]

pub mod assertions;
pub mod test_database;
pub mod test_server;

// Re-export commonly used types and functions
pub use assertions::*;
pub use test_data::*;
pub use test_database::*;
pub use test_server::*;
