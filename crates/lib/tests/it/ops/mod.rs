//! Operation catalogue integration tests
//!
//! Organized by area, mirroring the `catena::ops` submodules.

mod access_tests;
mod aggregate_tests;
mod convert_tests;
mod query_tests;
mod transform_tests;
