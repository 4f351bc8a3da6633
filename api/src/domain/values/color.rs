//! Color value object

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid"))
}

/// A named finish color with its `#RRGGBB` value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub name: String,
    pub hex: String,
}

impl Color {
    /// Create a validated color. The name is trimmed and the hex upper-cased.
    pub fn new(name: &str, hex: &str) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("Color name cannot be empty"));
        }
        let hex = hex.trim();
        if hex.is_empty() {
            return Err(DomainError::validation("Hex value cannot be empty"));
        }
        if !hex_pattern().is_match(hex) {
            return Err(DomainError::validation(
                "Hex value must be in format #RRGGBB",
            ));
        }

        Ok(Self {
            name: name.trim().to_string(),
            hex: hex.to_uppercase(),
        })
    }

    pub fn white() -> Self {
        Self {
            name: "White".to_string(),
            hex: "#FFFFFF".to_string(),
        }
    }

    pub fn black() -> Self {
        Self {
            name: "Black".to_string(),
            hex: "#000000".to_string(),
        }
    }

    pub fn brown() -> Self {
        Self {
            name: "Brown".to_string(),
            hex: "#8B4513".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uppercases_hex() {
        let c = Color::new(" Bronze ", "#cd853f").unwrap();
        assert_eq!(c.name, "Bronze");
        assert_eq!(c.hex, "#CD853F");
    }

    #[test]
    fn rejects_blank_name() {
        let err = Color::new("", "#FFFFFF").unwrap_err();
        assert!(err.to_string().contains("Color name cannot be empty"));
    }

    #[test]
    fn rejects_blank_hex() {
        let err = Color::new("White", " ").unwrap_err();
        assert!(err.to_string().contains("Hex value cannot be empty"));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["FFFFFF", "#FFF", "#FFFFFFF", "#GGGGGG", "#12 456"] {
            let err = Color::new("Bad", bad).unwrap_err();
            assert!(err.to_string().contains("#RRGGBB"), "accepted {}", bad);
        }
    }

    #[test]
    fn presets_are_valid() {
        for preset in [Color::white(), Color::black(), Color::brown()] {
            assert_eq!(Color::new(&preset.name, &preset.hex).unwrap(), preset);
        }
    }
}
