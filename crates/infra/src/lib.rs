//! # StrayCare Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite record repositories behind an r2d2 pool
//! - Schema migrations and the demonstration dataset
//! - Configuration loading (environment and JSON/TOML files)
//!
//! ## Architecture
//! - Implements traits defined in `straycare-core`
//! - Contains all "impure" code (I/O, file system, SQLite)

pub mod config;
pub mod database;
pub mod errors;

pub use database::*;
pub use errors::InfraError;
