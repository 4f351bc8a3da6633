//! Measure value object
//!
//! A non-negative length with a unit. Units are stored lower-cased.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const MM_PER_INCH: f64 = 25.4;
const INCHES_PER_FOOT: f64 = 12.0;

/// A length value with its unit (e.g. `24.5 in`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub value: f64,
    pub unit: String,
}

impl Measure {
    /// Create a validated measure. The unit is trimmed and lower-cased.
    pub fn new(value: f64, unit: &str) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::validation("Measure value must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("Measure value cannot be negative"));
        }
        if unit.trim().is_empty() {
            return Err(DomainError::validation("Unit cannot be empty"));
        }

        Ok(Self {
            value,
            unit: unit.trim().to_lowercase(),
        })
    }

    pub fn inches(value: f64) -> Self {
        Self {
            value,
            unit: "in".to_string(),
        }
    }

    pub fn millimeters(value: f64) -> Self {
        Self {
            value,
            unit: "mm".to_string(),
        }
    }

    pub fn feet(value: f64) -> Self {
        Self {
            value,
            unit: "ft".to_string(),
        }
    }

    /// Convert to another unit.
    ///
    /// Supported conversions are mm <-> in and in <-> ft. Converting to the
    /// current unit returns an equal measure.
    pub fn convert_to(&self, target_unit: &str) -> Result<Measure, DomainError> {
        let target = target_unit.trim().to_lowercase();

        let value = match (self.unit.as_str(), target.as_str()) {
            (from, to) if from == to => self.value,
            ("mm", "in") => self.value / MM_PER_INCH,
            ("in", "mm") => self.value * MM_PER_INCH,
            ("in", "ft") => self.value / INCHES_PER_FOOT,
            ("ft", "in") => self.value * INCHES_PER_FOOT,
            _ => {
                return Err(DomainError::validation(format!(
                    "Conversion from {} to {} is not supported",
                    self.unit, target_unit
                )))
            }
        };

        Ok(Measure {
            value,
            unit: target,
        })
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
