//! # StrayCare API
//!
//! HTTP application layer - commands, routes and the main entry point.
//!
//! This crate contains:
//! - Dashboard commands (timed, logged wrappers over the core service)
//! - Application context (dependency injection)
//! - The axum router serving `/api/dashboard`
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod http;
pub mod utils;

pub use context::*;
pub use http::router;
