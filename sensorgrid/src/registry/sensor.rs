//! Sensor record type.

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;

/// A named physical sensor.
///
/// All three fields are required on the wire:
///
/// ```json
/// {"name": "Sensor_2", "tags": ["roof"], "location": {"x": 60.0, "y": 90.0}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    /// Identifier used for lookups. Not validated and not required to be unique.
    pub name: String,
    /// Descriptive labels, in the order given.
    pub tags: Vec<String>,
    /// Where the sensor is.
    pub location: Coordinate,
}

impl Sensor {
    /// Create a new sensor.
    pub fn new(name: impl Into<String>, tags: Vec<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            tags,
            location,
        }
    }
}
