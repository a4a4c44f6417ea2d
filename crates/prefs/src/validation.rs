//! Input checks for values that reach the stores from user input.
//!
//! The stores accept any string; front ends call these before building a
//! patch so a typo doesn't end up persisted.

use std::fmt;

use crate::background::CUSTOM_PRESET_KEY;
use crate::language::Language;
use crate::presets::PresetCatalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidColor { field: String, value: String },
    EmptyColorList { field: String },
    InvalidAngle { value: String },
    UnknownPreset { key: String },
    UnknownLanguage { code: String, available: Vec<String> },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor { field, value } => write!(
                f,
                "Invalid color for '{}': \"{}\" (expected #RGB or #RRGGBB hex)",
                field, value
            ),
            Self::EmptyColorList { field } => write!(f, "'{}' needs at least one color", field),
            Self::InvalidAngle { value } => {
                write!(f, "Invalid gradient angle {} (expected a finite number)", value)
            }
            Self::UnknownPreset { key } => write!(
                f,
                "Unknown gradient preset \"{}\" (use a built-in key or \"{}\")",
                key, CUSTOM_PRESET_KEY
            ),
            Self::UnknownLanguage { code, available } => write!(
                f,
                "Unknown language \"{}\" (available: {})",
                code,
                available.join(", ")
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Accepts `#rgb` and `#rrggbb`, with or without the leading `#`.
pub fn validate_hex_color(value: &str) -> bool {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Lowercases and adds the leading `#`.
pub fn normalize_hex_color(value: &str) -> Option<String> {
    if !validate_hex_color(value) {
        return None;
    }
    let hex = value.trim().trim_start_matches('#').to_ascii_lowercase();
    Some(format!("#{hex}"))
}

pub fn validate_color(field: &str, value: &str) -> Result<String, ValidationError> {
    normalize_hex_color(value).ok_or_else(|| ValidationError::InvalidColor {
        field: field.to_string(),
        value: value.to_string(),
    })
}

pub fn validate_color_list(field: &str, values: &[String]) -> Result<Vec<String>, ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::EmptyColorList {
            field: field.to_string(),
        });
    }
    values.iter().map(|v| validate_color(field, v)).collect()
}

pub fn validate_angle(degrees: f64) -> Result<f64, ValidationError> {
    if degrees.is_finite() {
        Ok(degrees)
    } else {
        Err(ValidationError::InvalidAngle {
            value: degrees.to_string(),
        })
    }
}

pub fn validate_preset_key(catalog: &PresetCatalog, key: &str) -> Result<(), ValidationError> {
    if key == CUSTOM_PRESET_KEY || catalog.contains(key) {
        Ok(())
    } else {
        Err(ValidationError::UnknownPreset {
            key: key.to_string(),
        })
    }
}

pub fn validate_language(languages: &[Language], code: &str) -> Result<(), ValidationError> {
    if languages.iter().any(|l| l.code == code) {
        Ok(())
    } else {
        Err(ValidationError::UnknownLanguage {
            code: code.to_string(),
            available: languages.iter().map(|l| l.code.clone()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::default_languages;

    #[test]
    fn test_validate_hex_color_valid() {
        assert!(validate_hex_color("#ffffff"));
        assert!(validate_hex_color("#FFFFFF"));
        assert!(validate_hex_color("#abc"));
        assert!(validate_hex_color("112233"));
        assert!(validate_hex_color("  #1a2b3c  "));
    }

    #[test]
    fn test_validate_hex_color_invalid() {
        assert!(!validate_hex_color("#gggggg"));
        assert!(!validate_hex_color("#12345"));
        assert!(!validate_hex_color("#1234567"));
        assert!(!validate_hex_color(""));
        assert!(!validate_hex_color("#"));
        assert!(!validate_hex_color("rebeccapurple"));
    }

    #[test]
    fn test_normalize_hex_color() {
        assert_eq!(normalize_hex_color("ABCDEF").as_deref(), Some("#abcdef"));
        assert_eq!(normalize_hex_color(" #FFF ").as_deref(), Some("#fff"));
        assert_eq!(normalize_hex_color("nope"), None);
    }

    #[test]
    fn test_validate_angle() {
        assert_eq!(validate_angle(-45.0), Ok(-45.0));
        assert_eq!(
            validate_angle(f64::NAN),
            Err(ValidationError::InvalidAngle {
                value: "NaN".to_string()
            })
        );
        assert!(validate_angle(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_color_list() {
        let ok = validate_color_list("colorStops", &["#FFF".to_string(), "000000".to_string()]);
        assert_eq!(ok.unwrap(), vec!["#fff", "#000000"]);

        let err = validate_color_list("colorStops", &["#fff".to_string(), "blue".to_string()]);
        assert_eq!(
            err.unwrap_err(),
            ValidationError::InvalidColor {
                field: "colorStops".to_string(),
                value: "blue".to_string()
            }
        );

        assert!(matches!(
            validate_color_list("colorStops", &[]),
            Err(ValidationError::EmptyColorList { .. })
        ));
    }

    #[test]
    fn test_validate_preset_key() {
        let catalog = PresetCatalog::builtin();
        assert!(validate_preset_key(&catalog, "ocean").is_ok());
        assert!(validate_preset_key(&catalog, "custom").is_ok());
        assert!(validate_preset_key(&catalog, "lava").is_err());
    }

    #[test]
    fn test_validate_language() {
        let languages = default_languages();
        assert!(validate_language(&languages, "ar").is_ok());

        let err = validate_language(&languages, "fr").unwrap_err();
        assert_eq!(err.to_string(), "Unknown language \"fr\" (available: en, ar)");
    }
}
