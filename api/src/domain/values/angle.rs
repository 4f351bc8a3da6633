//! Angle value object

use serde::{Deserialize, Serialize};

const TOLERANCE: f64 = 0.01;

/// An angle in degrees, normalized into `[0, 360)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    pub fn new(degrees: f64) -> Self {
        let mut normalized = degrees.rem_euclid(360.0);
        // rem_euclid can round tiny negative inputs up to exactly 360
        if normalized >= 360.0 {
            normalized = 0.0;
        }
        Self {
            degrees: normalized,
        }
    }

    pub fn zero() -> Self {
        Self { degrees: 0.0 }
    }

    pub fn right() -> Self {
        Self { degrees: 90.0 }
    }

    pub fn straight() -> Self {
        Self { degrees: 180.0 }
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn radians(&self) -> f64 {
        self.degrees.to_radians()
    }

    pub fn is_right(&self) -> bool {
        (self.degrees - 90.0).abs() < TOLERANCE
    }

    pub fn is_straight(&self) -> bool {
        (self.degrees - 180.0).abs() < TOLERANCE
    }

    pub fn is_acute(&self) -> bool {
        self.degrees > 0.0 && self.degrees < 90.0
    }

    pub fn is_obtuse(&self) -> bool {
        self.degrees > 90.0 && self.degrees < 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_large_angles() {
        assert_eq!(Angle::new(450.0).degrees(), 90.0);
        assert_eq!(Angle::new(360.0).degrees(), 0.0);
    }

    #[test]
    fn normalizes_negative_angles() {
        assert_eq!(Angle::new(-90.0).degrees(), 270.0);
        assert_eq!(Angle::new(-720.0).degrees(), 0.0);
    }

    #[test]
    fn tiny_negative_angle_stays_in_range() {
        let a = Angle::new(-1e-20);
        assert!(a.degrees() >= 0.0 && a.degrees() < 360.0);
    }

    #[test]
    fn classification() {
        assert!(Angle::right().is_right());
        assert!(Angle::new(90.005).is_right());
        assert!(Angle::straight().is_straight());
        assert!(Angle::new(45.0).is_acute());
        assert!(!Angle::zero().is_acute());
        assert!(Angle::new(135.0).is_obtuse());
        assert!(!Angle::right().is_obtuse());
    }

    #[test]
    fn radians_conversion() {
        assert!((Angle::straight().radians() - std::f64::consts::PI).abs() < 1e-12);
    }
}
