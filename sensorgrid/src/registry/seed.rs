//! Initial registry contents.

use crate::coord::Coordinate;

use super::Sensor;

/// The sensors a freshly started service is seeded with.
pub fn seed_sensors() -> Vec<Sensor> {
    vec![
        Sensor::new(
            "Sensor_1",
            vec!["This is a tag".to_string()],
            Coordinate::new(0.0, 0.0),
        ),
        Sensor::new(
            "Sensor_2",
            vec!["This is a tag_2".to_string()],
            Coordinate::new(60.0, 90.0),
        ),
        Sensor::new(
            "Sensor_3",
            vec!["This is a tag_3".to_string()],
            Coordinate::new(159.12, 7.13),
        ),
    ]
}
