//! Application bootstrap and lifecycle management.
//!
//! This module provides the `SensorGridApp` type which owns the registry,
//! binds the listener, and serves the HTTP API until a shutdown token fires.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                    SensorGridApp                      │
//! │                                                       │
//! │  1. SensorRegistry (seeded or empty) ──► Arc          │
//! │  2. TcpListener (AppConfig::bind)                     │
//! │  3. axum Router ◄── api::router(registry)             │
//! │  4. CancellationToken ──► graceful shutdown           │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use sensorgrid::app::{AppConfig, SensorGridApp};
//! use tokio_util::sync::CancellationToken;
//!
//! let app = SensorGridApp::bind(AppConfig::default()).await?;
//! let shutdown = CancellationToken::new();
//! app.serve(shutdown.clone()).await?;
//! ```

mod bootstrap;
mod config;
mod error;

pub use bootstrap::SensorGridApp;
pub use config::AppConfig;
pub use error::AppError;
