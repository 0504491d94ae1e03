//! Planar coordinate type
//!
//! Provides the [`Coordinate`] value type used for sensor locations and the
//! Euclidean distance metric the registry's nearest-neighbor query is built on.

use serde::{Deserialize, Serialize};

/// A point in 2D space.
///
/// Coordinates are plain values: they are copied in and out of the registry,
/// compared field-wise, and never mutated in place.
///
/// # Wire Format
///
/// Serialized as a nested object: `{"x": 60.0, "y": 90.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Horizontal component
    pub x: f64,
    /// Vertical component
    pub y: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to another coordinate.
    ///
    /// `sqrt((x2 - x1)^2 + (y2 - y1)^2)`, evaluated with `hypot` so large
    /// finite components do not overflow in the intermediate squares.
    #[inline]
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.hypot(dy)
    }

    /// Returns true when both components are finite (not NaN or infinite).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let c = Coordinate::new(159.12, 7.13);
        assert_eq!(c.distance_to(&c), 0.0);
    }

    #[test]
    fn test_distance_pythagorean_triple() {
        let a = Coordinate::origin();
        let b = Coordinate::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_distance_with_negative_components() {
        let a = Coordinate::new(-3.0, 0.0);
        let b = Coordinate::new(0.0, -4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_distance_large_components_stays_finite() {
        let a = Coordinate::new(9e199, 0.0);
        let b = Coordinate::new(1e200, 0.0);
        let d = a.distance_to(&b);
        assert!(d.is_finite());
        assert!((d - 1e199).abs() <= 1e199 * 1e-12, "distance was {}", d);
    }

    #[test]
    fn test_equality_is_field_wise() {
        assert_eq!(Coordinate::new(60.0, 90.0), Coordinate::new(60.0, 90.0));
        assert_ne!(Coordinate::new(60.0, 90.0), Coordinate::new(90.0, 60.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Coordinate::new(1.0, -1.0).is_finite());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_finite());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(Coordinate::new(60.0, 90.0)).unwrap();
        assert_eq!(json, serde_json::json!({"x": 60.0, "y": 90.0}));
    }

    #[test]
    fn test_json_rejects_missing_component() {
        let result: Result<Coordinate, _> = serde_json::from_str(r#"{"x": 1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_distance_is_symmetric(
                x1 in -1.0e6..1.0e6_f64,
                y1 in -1.0e6..1.0e6_f64,
                x2 in -1.0e6..1.0e6_f64,
                y2 in -1.0e6..1.0e6_f64,
            ) {
                let a = Coordinate::new(x1, y1);
                let b = Coordinate::new(x2, y2);
                prop_assert_eq!(a.distance_to(&b), b.distance_to(&a));
            }

            #[test]
            fn test_distance_is_non_negative(
                x1 in -1.0e6..1.0e6_f64,
                y1 in -1.0e6..1.0e6_f64,
                x2 in -1.0e6..1.0e6_f64,
                y2 in -1.0e6..1.0e6_f64,
            ) {
                let d = Coordinate::new(x1, y1).distance_to(&Coordinate::new(x2, y2));
                prop_assert!(d >= 0.0, "distance {} should be non-negative", d);
            }
        }
    }
}
