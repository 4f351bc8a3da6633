//! Size constraints for a buildable system

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Allowed opening size range of a system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeConstraints {
    pub min_height: f64,
    pub max_height: f64,
    pub min_width: f64,
    pub max_width: f64,
}

impl SizeConstraints {
    pub fn new(
        min_height: f64,
        max_height: f64,
        min_width: f64,
        max_width: f64,
    ) -> Result<Self, DomainError> {
        if min_height < 0.0 {
            return Err(DomainError::validation("Minimum height cannot be negative"));
        }
        if !(max_height > min_height) {
            return Err(DomainError::validation(
                "Maximum height must be greater than minimum height",
            ));
        }
        if min_width < 0.0 {
            return Err(DomainError::validation("Minimum width cannot be negative"));
        }
        if !(max_width > min_width) {
            return Err(DomainError::validation(
                "Maximum width must be greater than minimum width",
            ));
        }

        Ok(Self {
            min_height,
            max_height,
            min_width,
            max_width,
        })
    }
}
