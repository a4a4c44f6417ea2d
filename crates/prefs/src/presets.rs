//! Built-in animated gradient presets.
//!
//! Each preset is a list of gradient sets; an animated background cycles
//! through the sets in order. Every built-in set is a three-stop gradient.

use serde::Serialize;

/// Catalog entry used when a preset key cannot be resolved.
pub const DEFAULT_PRESET_KEY: &str = "aurora";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientPreset {
    pub key: String,
    pub display_name: String,
    pub gradient_sets: Vec<Vec<String>>,
}

impl GradientPreset {
    fn new(key: &str, display_name: &str, sets: &[[&str; 3]]) -> Self {
        Self {
            key: key.to_string(),
            display_name: display_name.to_string(),
            gradient_sets: sets
                .iter()
                .map(|set| set.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }
}

/// Read-only, ordered mapping from preset key to preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetCatalog {
    presets: Vec<GradientPreset>,
}

impl PresetCatalog {
    pub fn builtin() -> Self {
        Self {
            presets: vec![
                GradientPreset::new(
                    "aurora",
                    "Aurora",
                    &[
                        ["#00c6ff", "#0072ff", "#7f00ff"],
                        ["#7f00ff", "#e100ff", "#00c6ff"],
                        ["#0072ff", "#00c6ff", "#e100ff"],
                    ],
                ),
                GradientPreset::new(
                    "sunset",
                    "Sunset Glow",
                    &[
                        ["#ff7e5f", "#feb47b", "#ff6a88"],
                        ["#ff6a88", "#ff99ac", "#ff7e5f"],
                        ["#feb47b", "#ff7e5f", "#ff99ac"],
                    ],
                ),
                GradientPreset::new(
                    "ocean",
                    "Ocean Breeze",
                    &[
                        ["#2193b0", "#6dd5ed", "#00c9ff"],
                        ["#00c9ff", "#92fe9d", "#2193b0"],
                        ["#6dd5ed", "#2193b0", "#92fe9d"],
                    ],
                ),
                GradientPreset::new(
                    "forest",
                    "Forest Mist",
                    &[
                        ["#134e5e", "#71b280", "#2f7336"],
                        ["#2f7336", "#aa3a38", "#134e5e"],
                        ["#71b280", "#134e5e", "#aa3a38"],
                    ],
                ),
                GradientPreset::new(
                    "cosmic",
                    "Cosmic Fusion",
                    &[
                        ["#ff00cc", "#333399", "#6a0dad"],
                        ["#6a0dad", "#ff00cc", "#1a1a2e"],
                        ["#333399", "#1a1a2e", "#ff00cc"],
                    ],
                ),
            ],
        }
    }

    pub fn get(&self, key: &str) -> Option<&GradientPreset> {
        self.presets.iter().find(|p| p.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The entry used for unknown keys.
    pub fn default_preset(&self) -> &GradientPreset {
        self.get(DEFAULT_PRESET_KEY).unwrap_or(&self.presets[0])
    }

    /// Looks up `key`, falling back to [`PresetCatalog::default_preset`].
    pub fn resolve(&self, key: &str) -> &GradientPreset {
        self.get(key).unwrap_or_else(|| self.default_preset())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GradientPreset> {
        self.presets.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> std::ops::Index<&'a str> for PresetCatalog {
    type Output = GradientPreset;

    fn index(&self, key: &'a str) -> &Self::Output {
        self.get(key)
            .unwrap_or_else(|| panic!("no preset named {key:?}"))
    }
}
