//! Nearest-neighbor scan over a slice of sensors.

use crate::coord::Coordinate;

use super::Sensor;

/// Find the sensor closest to `target` by Euclidean distance.
///
/// The result is deterministic:
///
/// 1. A sensor located exactly at `target` wins outright; the first such
///    sensor in storage order is returned.
/// 2. Otherwise a linear scan keeps the best sensor seen so far, starting
///    from the first one, and replaces it only on a strictly smaller distance.
///    Ties therefore resolve to the earliest sensor in storage order.
///
/// Returns `None` only when `sensors` is empty.
pub fn find_nearest<'a>(sensors: &'a [Sensor], target: &Coordinate) -> Option<&'a Sensor> {
    if let Some(exact) = sensors.iter().find(|s| s.location == *target) {
        return Some(exact);
    }

    let mut remaining = sensors.iter();
    let first = remaining.next()?;
    let mut best = first;
    let mut best_distance = first.location.distance_to(target);

    for sensor in remaining {
        let distance = sensor.location.distance_to(target);
        if distance < best_distance {
            best = sensor;
            best_distance = distance;
        }
    }

    Some(best)
}
