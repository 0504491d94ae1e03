//! SensorGrid - an in-memory registry of named spatial sensors
//!
//! This library provides the sensor registry (create, list, lookup, update,
//! delete, nearest-neighbor query), the HTTP transport that exposes it, and
//! the configuration, logging and bootstrap plumbing used by the CLI.

pub mod api;
pub mod app;
pub mod config;
pub mod coord;
pub mod logging;
pub mod registry;

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
