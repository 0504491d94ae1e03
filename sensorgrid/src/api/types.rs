//! Request and response bodies.

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;

/// Body of `PATCH /sensors/:name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSensorRequest {
    /// Replacement tags.
    pub tags: Vec<String>,
    /// Replacement location.
    pub location: Coordinate,
}

/// Query string of `GET /nearest`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct NearestQuery {
    pub x: f64,
    pub y: f64,
}

impl NearestQuery {
    /// The queried point.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }
}

/// A single-key status object: `{"success": ".."}` or `{"error": ".."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}
