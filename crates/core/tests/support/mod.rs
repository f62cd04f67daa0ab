//! Shared test helpers for `straycare-core` integration tests.
//!
//! In-memory sources and record builders so dashboard tests can focus on
//! behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod records;
pub mod sources;
