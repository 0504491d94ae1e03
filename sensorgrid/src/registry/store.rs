//! Thread-safe sensor storage.

use parking_lot::Mutex;
use tracing::debug;

use crate::coord::Coordinate;

use super::nearest::find_nearest;
use super::seed::seed_sensors;
use super::Sensor;

/// In-memory registry of sensors, insertion order preserved.
///
/// Every operation takes the lock for its own duration only and copies
/// sensors in and out, so no caller ever holds a reference into storage.
/// Share between request handlers with `Arc<SensorRegistry>`.
#[derive(Debug, Default)]
pub struct SensorRegistry {
    sensors: Mutex<Vec<Sensor>>,
}

impl SensorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding `sensors` in the given order.
    pub fn with_sensors(sensors: Vec<Sensor>) -> Self {
        Self {
            sensors: Mutex::new(sensors),
        }
    }

    /// Create a registry holding the default seed sensors.
    pub fn seeded() -> Self {
        Self::with_sensors(seed_sensors())
    }

    /// Append a sensor to the end of the registry.
    ///
    /// No duplicate-name check is made. Returns the stored sensor.
    pub fn create(&self, sensor: Sensor) -> Sensor {
        let mut sensors = self.sensors.lock();
        sensors.push(sensor.clone());
        debug!(name = %sensor.name, total = sensors.len(), "Sensor created");
        sensor
    }

    /// Snapshot of all sensors in storage order.
    pub fn list(&self) -> Vec<Sensor> {
        self.sensors.lock().clone()
    }

    /// First sensor whose name equals `name`, in storage order.
    pub fn get_by_name(&self, name: &str) -> Option<Sensor> {
        self.sensors.lock().iter().find(|s| s.name == name).cloned()
    }

    /// Replace the tags and location of the first sensor named `name`.
    ///
    /// The name itself never changes. Later sensors with the same name are
    /// left untouched. Returns `false` when no sensor matched.
    pub fn update(&self, name: &str, tags: Vec<String>, location: Coordinate) -> bool {
        let mut sensors = self.sensors.lock();
        match sensors.iter_mut().find(|s| s.name == name) {
            Some(sensor) => {
                sensor.tags = tags;
                sensor.location = location;
                debug!(name, %location, "Sensor updated");
                true
            }
            None => false,
        }
    }

    /// Remove every sensor named `name`, keeping the order of the rest.
    ///
    /// Returns `true` if at least one sensor was removed.
    pub fn delete(&self, name: &str) -> bool {
        let mut sensors = self.sensors.lock();
        let before = sensors.len();
        sensors.retain(|s| s.name != name);
        let removed = before - sensors.len();
        if removed > 0 {
            debug!(name, removed, "Sensor deleted");
        }
        removed > 0
    }

    /// The sensor closest to `target`; `None` only when the registry is empty.
    ///
    /// See [`find_nearest`] for the exact-match and tie-break rules.
    pub fn find_nearest(&self, target: Coordinate) -> Option<Sensor> {
        find_nearest(&self.sensors.lock(), &target).cloned()
    }

    /// Number of stored sensors.
    pub fn len(&self) -> usize {
        self.sensors.lock().len()
    }

    /// Returns true if no sensors are stored.
    pub fn is_empty(&self) -> bool {
        self.sensors.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor(name: &str, x: f64, y: f64) -> Sensor {
        Sensor::new(name, vec![format!("{}-tag", name)], Coordinate::new(x, y))
    }

    fn names(registry: &SensorRegistry) -> Vec<String> {
        registry.list().into_iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = SensorRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_create_returns_sensor_and_appends() {
        let registry = SensorRegistry::new();
        let s = sensor("a", 1.0, 2.0);
        let created = registry.create(s.clone());
        assert_eq!(created, s);
        assert_eq!(registry.list(), vec![s]);
    }

    #[test]
    fn test_create_allows_duplicate_names() {
        let registry = SensorRegistry::new();
        registry.create(sensor("dup", 1.0, 1.0));
        registry.create(sensor("dup", 2.0, 2.0));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_get_by_name_found() {
        let registry = SensorRegistry::seeded();
        let found = registry.get_by_name("Sensor_2").unwrap();
        assert_eq!(found.location, Coordinate::new(60.0, 90.0));
    }

    #[test]
    fn test_get_by_name_missing() {
        let registry = SensorRegistry::seeded();
        assert!(registry.get_by_name("Sensor_404").is_none());
    }

    #[test]
    fn test_get_by_name_returns_first_duplicate() {
        let registry = SensorRegistry::new();
        registry.create(sensor("dup", 1.0, 1.0));
        registry.create(sensor("dup", 2.0, 2.0));
        let found = registry.get_by_name("dup").unwrap();
        assert_eq!(found.location, Coordinate::new(1.0, 1.0));
    }

    #[test]
    fn test_update_changes_tags_and_location_only() {
        let registry = SensorRegistry::seeded();
        let tags = vec!["moved".to_string()];
        let location = Coordinate::new(-5.0, 5.0);

        assert!(registry.update("Sensor_1", tags.clone(), location));

        let updated = registry.get_by_name("Sensor_1").unwrap();
        assert_eq!(updated.name, "Sensor_1");
        assert_eq!(updated.tags, tags);
        assert_eq!(updated.location, location);
    }

    #[test]
    fn test_update_is_idempotent() {
        let registry = SensorRegistry::seeded();
        let tags = vec!["t".to_string()];
        let location = Coordinate::new(1.0, 1.0);

        assert!(registry.update("Sensor_3", tags.clone(), location));
        let after_first = registry.list();
        assert!(registry.update("Sensor_3", tags, location));
        assert_eq!(registry.list(), after_first);
    }

    #[test]
    fn test_update_missing_leaves_registry_unchanged() {
        let registry = SensorRegistry::seeded();
        let before = registry.list();
        assert!(!registry.update("nope", vec![], Coordinate::origin()));
        assert_eq!(registry.list(), before);
    }

    #[test]
    fn test_update_touches_first_duplicate_only() {
        let registry = SensorRegistry::new();
        registry.create(sensor("dup", 1.0, 1.0));
        registry.create(sensor("dup", 2.0, 2.0));

        assert!(registry.update("dup", vec![], Coordinate::new(9.0, 9.0)));

        let all = registry.list();
        assert_eq!(all[0].location, Coordinate::new(9.0, 9.0));
        assert_eq!(all[1].location, Coordinate::new(2.0, 2.0));
        assert_eq!(all[1].tags, vec!["dup-tag".to_string()]);
    }

    #[test]
    fn test_delete_removes_all_duplicates_and_preserves_order() {
        let registry = SensorRegistry::new();
        registry.create(sensor("a", 0.0, 0.0));
        registry.create(sensor("dup", 1.0, 1.0));
        registry.create(sensor("b", 0.0, 0.0));
        registry.create(sensor("dup", 2.0, 2.0));
        registry.create(sensor("c", 0.0, 0.0));

        assert!(registry.delete("dup"));
        assert_eq!(names(&registry), vec!["a", "b", "c"]);
        assert!(!registry.delete("dup"));
    }

    #[test]
    fn test_delete_missing_returns_false() {
        let registry = SensorRegistry::seeded();
        assert!(!registry.delete("missing"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_find_nearest_empty_registry() {
        let registry = SensorRegistry::new();
        assert!(registry.find_nearest(Coordinate::origin()).is_none());
    }

    #[test]
    fn test_find_nearest_exact_match_at_origin() {
        let registry = SensorRegistry::seeded();
        let found = registry.find_nearest(Coordinate::new(0.0, 0.0)).unwrap();
        assert_eq!(found.name, "Sensor_1");
        assert_eq!(found.location, Coordinate::new(0.0, 0.0));
    }

    #[test]
    fn test_find_nearest_matches_brute_force() {
        let registry = SensorRegistry::seeded();
        let target = Coordinate::new(100.0, 50.0);

        let expected = registry
            .list()
            .into_iter()
            .map(|s| {
                let d = ((s.location.x - target.x).powi(2) + (s.location.y - target.y).powi(2))
                    .sqrt();
                (s, d)
            })
            .fold(None::<(Sensor, f64)>, |best, (s, d)| match best {
                Some((_, bd)) if bd <= d => best,
                _ => Some((s, d)),
            })
            .map(|(s, _)| s)
            .unwrap();

        let found = registry.find_nearest(target).unwrap();
        assert_eq!(found, expected);
        assert_eq!(found.name, "Sensor_2");
    }

    #[test]
    fn test_round_trip_create_get_update_get() {
        let registry = SensorRegistry::new();
        let s = sensor("rt", 1.0, 2.0);
        registry.create(s.clone());
        assert_eq!(registry.get_by_name("rt"), Some(s));

        let tags = vec!["updated".to_string()];
        assert!(registry.update("rt", tags.clone(), Coordinate::new(3.0, 4.0)));

        let after = registry.get_by_name("rt").unwrap();
        assert_eq!(after.tags, tags);
        assert_eq!(after.location, Coordinate::new(3.0, 4.0));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_concurrent_creates_are_all_stored() {
        use std::sync::Arc;

        let registry = Arc::new(SensorRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        registry.create(sensor(&format!("t{}-{}", t, i), i as f64, t as f64));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.len(), 400);
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_sensors() -> impl Strategy<Value = Vec<Sensor>> {
            prop::collection::vec(
                ("[a-d]{1,2}", -100.0..100.0_f64, -100.0..100.0_f64)
                    .prop_map(|(name, x, y)| Sensor::new(name, vec![], Coordinate::new(x, y))),
                0..20,
            )
        }

        proptest! {
            #[test]
            fn test_list_preserves_creation_order(sensors in arb_sensors()) {
                let registry = SensorRegistry::new();
                for s in &sensors {
                    registry.create(s.clone());
                }
                prop_assert_eq!(registry.list(), sensors);
            }

            #[test]
            fn test_find_nearest_is_earliest_minimum(
                sensors in arb_sensors(),
                x in -100.0..100.0_f64,
                y in -100.0..100.0_f64,
            ) {
                let registry = SensorRegistry::with_sensors(sensors.clone());
                let target = Coordinate::new(x, y);
                let found = registry.find_nearest(target);

                prop_assert_eq!(found.is_none(), sensors.is_empty());
                if let Some(found) = found {
                    let distances: Vec<f64> =
                        sensors.iter().map(|s| s.location.distance_to(&target)).collect();
                    let min = distances.iter().cloned().fold(f64::INFINITY, f64::min);
                    let first_min = distances.iter().position(|d| *d == min).unwrap();
                    prop_assert_eq!(&found, &sensors[first_min]);
                }
            }

            #[test]
            fn test_delete_removes_every_match(sensors in arb_sensors(), name in "[a-d]{1,2}") {
                let registry = SensorRegistry::with_sensors(sensors.clone());
                let existed = sensors.iter().any(|s| s.name == name);

                prop_assert_eq!(registry.delete(&name), existed);
                let expected: Vec<Sensor> =
                    sensors.into_iter().filter(|s| s.name != name).collect();
                prop_assert_eq!(registry.list(), expected);
                prop_assert!(!registry.delete(&name));
            }
        }
    }
}
