//! HTTP transport adapter for the sensor registry.
//!
//! Decodes requests into typed arguments, invokes [`SensorRegistry`]
//! operations, and encodes the result as JSON with the matching status code.
//!
//! # Routes
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | GET | `/sensors` | 200 sensor list | - |
//! | POST | `/sensors` | 201 created sensor | 400 malformed body |
//! | GET | `/sensors/:name` | 200 sensor | 404 |
//! | PATCH | `/sensors/:name` | 200 success message | 400 malformed body, 404 |
//! | DELETE | `/sensors/:name` | 200 success message | 200 error message |
//! | GET | `/nearest?x=..&y=..` | 200 sensor | 400 bad coordinate, 404 empty registry |
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use sensorgrid::api;
//! use sensorgrid::registry::SensorRegistry;
//!
//! let router = api::router(Arc::new(SensorRegistry::seeded()));
//! axum::serve(listener, router).await?;
//! ```

mod error;
mod handlers;
mod types;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::registry::SensorRegistry;

pub use error::ApiError;
pub use types::{NearestQuery, StatusMessage, UpdateSensorRequest};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<SensorRegistry>,
}

impl AppState {
    /// Wrap a registry for use as router state.
    pub fn new(registry: Arc<SensorRegistry>) -> Self {
        Self { registry }
    }

    /// The registry requests operate on.
    pub fn registry(&self) -> &SensorRegistry {
        &self.registry
    }
}

/// Build the router with every sensor route wired to `registry`.
pub fn router(registry: Arc<SensorRegistry>) -> Router {
    Router::new()
        .route(
            "/sensors",
            get(handlers::list_sensors).post(handlers::create_sensor),
        )
        .route(
            "/sensors/:name",
            get(handlers::get_sensor)
                .patch(handlers::update_sensor)
                .delete(handlers::delete_sensor),
        )
        .route("/nearest", get(handlers::find_nearest))
        .with_state(AppState::new(registry))
}
