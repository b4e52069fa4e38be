//! Container integration tests
//!
//! This module tests the Container data model: key normalization, ordering,
//! the three notions of equality, and serde support.

mod serialization_tests;
