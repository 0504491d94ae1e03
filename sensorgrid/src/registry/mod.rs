//! Sensor Registry
//!
//! An in-memory, insertion-ordered store of named sensors with full lifecycle
//! operations and a nearest-neighbor query by coordinate.
//!
//! # Duplicate Names
//!
//! Names act as the primary key but uniqueness is not enforced on create.
//! Operations treat duplicates differently, and the difference is part of
//! the contract:
//!
//! | Operation | Records affected |
//! |-----------|------------------|
//! | `get_by_name` | first match in storage order |
//! | `update` | first match in storage order |
//! | `delete` | every match |
//!
//! # Example
//!
//! ```ignore
//! use sensorgrid::coord::Coordinate;
//! use sensorgrid::registry::{Sensor, SensorRegistry};
//!
//! let registry = SensorRegistry::new();
//! registry.create(Sensor::new("north", vec![], Coordinate::new(0.0, 10.0)));
//! registry.create(Sensor::new("south", vec![], Coordinate::new(0.0, -10.0)));
//!
//! let nearest = registry.find_nearest(Coordinate::new(1.0, 8.0));
//! assert_eq!(nearest.map(|s| s.name), Some("north".to_string()));
//! ```

mod nearest;
mod seed;
mod sensor;
mod store;

pub use nearest::find_nearest;
pub use seed::seed_sensors;
pub use sensor::Sensor;
pub use store::SensorRegistry;
