//! Background rendering preference.
//!
//! [`BackgroundSettings`] keeps one parameter record per mode next to the
//! active [`BackgroundMode`], so switching modes and back loses nothing. The
//! persisted form is a flat camelCase JSON object under [`BACKGROUND_KEY`].
//! Renderers should read [`BackgroundStore::active`], which only carries the
//! fields of the active mode.

use glaze_storage::SharedStore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::persist;
use crate::presets::PresetCatalog;

/// Storage key for the persisted settings record.
pub const BACKGROUND_KEY: &str = "backgroundSettings";

/// Preset key that selects `customGradientSets` instead of a catalog entry.
pub const CUSTOM_PRESET_KEY: &str = "custom";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundMode {
    Video,
    Image,
    Solid,
    Gradient,
    #[default]
    AnimatedGradient,
}

impl BackgroundMode {
    pub const ALL: [BackgroundMode; 5] = [
        BackgroundMode::Video,
        BackgroundMode::Image,
        BackgroundMode::Solid,
        BackgroundMode::Gradient,
        BackgroundMode::AnimatedGradient,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "video" => Some(BackgroundMode::Video),
            "image" => Some(BackgroundMode::Image),
            "solid" => Some(BackgroundMode::Solid),
            "gradient" => Some(BackgroundMode::Gradient),
            "animated-gradient" | "animated" => Some(BackgroundMode::AnimatedGradient),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundMode::Video => "video",
            BackgroundMode::Image => "image",
            BackgroundMode::Solid => "solid",
            BackgroundMode::Gradient => "gradient",
            BackgroundMode::AnimatedGradient => "animated-gradient",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BackgroundMode::Video => "Video",
            BackgroundMode::Image => "Image",
            BackgroundMode::Solid => "Solid Color",
            BackgroundMode::Gradient => "Gradient",
            BackgroundMode::AnimatedGradient => "Animated Gradient",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

impl GradientKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Some(GradientKind::Linear),
            "radial" => Some(GradientKind::Radial),
            _ => None,
        }
    }
}

/// Static gradient parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientSettings {
    #[serde(rename = "gradientKind")]
    pub kind: GradientKind,
    #[serde(rename = "gradientAngle")]
    pub angle_degrees: f64,
    /// Always at least one stop.
    #[serde(rename = "colorStops")]
    pub color_stops: Vec<String>,
}

impl Default for GradientSettings {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            angle_degrees: 135.0,
            color_stops: vec!["#667eea".to_string(), "#764ba2".to_string()],
        }
    }
}

/// Animated gradient parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimatedGradientSettings {
    /// A [`PresetCatalog`] key, or [`CUSTOM_PRESET_KEY`].
    pub preset_key: String,
    pub speed_ms: u64,
    /// CSS `animation-direction` value.
    #[serde(rename = "animationDirection")]
    pub direction: String,
    /// Only read when `preset_key` is [`CUSTOM_PRESET_KEY`].
    pub custom_gradient_sets: Vec<Vec<String>>,
}

impl Default for AnimatedGradientSettings {
    fn default() -> Self {
        Self {
            preset_key: crate::presets::DEFAULT_PRESET_KEY.to_string(),
            speed_ms: 15_000,
            direction: "alternate".to_string(),
            custom_gradient_sets: vec![vec![
                "#667eea".to_string(),
                "#764ba2".to_string(),
                "#f093fb".to_string(),
            ]],
        }
    }
}

/// The full persisted background record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundSettings {
    pub mode: BackgroundMode,
    pub video_url: String,
    pub image_url: String,
    pub color: String,
    #[serde(flatten)]
    pub gradient: GradientSettings,
    #[serde(flatten)]
    pub animated: AnimatedGradientSettings,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            mode: BackgroundMode::AnimatedGradient,
            video_url: "/videos/background.mp4".to_string(),
            image_url: "/images/background.jpg".to_string(),
            color: "#0f172a".to_string(),
            gradient: GradientSettings::default(),
            animated: AnimatedGradientSettings::default(),
        }
    }
}

impl BackgroundSettings {
    /// Rebuilds settings from a persisted record, filling anything missing
    /// or malformed from the defaults.
    pub fn from_json(raw: &str) -> Self {
        let mut settings = Self::default();
        settings.apply(BackgroundPatch::from_json_lenient(raw));
        settings
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            warn!(error = %e, "failed to encode background settings");
            String::from("{}")
        })
    }

    /// Shallow merge: every field present in `patch` replaces the current
    /// value wholesale, including the list fields.
    pub fn apply(&mut self, patch: BackgroundPatch) {
        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
        if let Some(url) = patch.video_url {
            self.video_url = url;
        }
        if let Some(url) = patch.image_url {
            self.image_url = url;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(kind) = patch.gradient_kind {
            self.gradient.kind = kind;
        }
        if let Some(angle) = patch.gradient_angle {
            if angle.is_finite() {
                self.gradient.angle_degrees = angle;
            } else {
                warn!(angle, "ignoring non-finite gradient angle");
            }
        }
        if let Some(stops) = patch.color_stops {
            if stops.is_empty() {
                warn!("ignoring empty gradient color stops");
            } else {
                self.gradient.color_stops = stops;
            }
        }
        if let Some(key) = patch.preset_key {
            self.animated.preset_key = key;
        }
        if let Some(speed) = patch.speed_ms {
            self.animated.speed_ms = speed;
        }
        if let Some(direction) = patch.animation_direction {
            self.animated.direction = direction;
        }
        if let Some(sets) = patch.custom_gradient_sets {
            self.animated.custom_gradient_sets = sets;
        }
    }

    /// Gradient sets for the animated mode: the custom sets for
    /// [`CUSTOM_PRESET_KEY`], otherwise the catalog entry, otherwise the
    /// catalog default. Returns the key that was actually used.
    pub fn resolve_gradient_sets<'a>(
        &'a self,
        presets: &'a PresetCatalog,
    ) -> (&'a str, &'a [Vec<String>]) {
        let key = self.animated.preset_key.as_str();
        if key == CUSTOM_PRESET_KEY {
            if !self.animated.custom_gradient_sets.is_empty() {
                return (
                    CUSTOM_PRESET_KEY,
                    self.animated.custom_gradient_sets.as_slice(),
                );
            }
            debug!("custom preset selected without gradient sets");
        } else if !presets.contains(key) {
            debug!(key, "unknown gradient preset, using default");
        }

        let preset = presets.resolve(key);
        (preset.key.as_str(), preset.gradient_sets.as_slice())
    }

    /// Typed view of the active mode.
    pub fn active(&self, presets: &PresetCatalog) -> Background {
        match self.mode {
            BackgroundMode::Video => Background::Video {
                url: self.video_url.clone(),
            },
            BackgroundMode::Image => Background::Image {
                url: self.image_url.clone(),
            },
            BackgroundMode::Solid => Background::Solid {
                color: self.color.clone(),
            },
            BackgroundMode::Gradient => Background::Gradient(self.gradient.clone()),
            BackgroundMode::AnimatedGradient => {
                let (key, sets) = self.resolve_gradient_sets(presets);
                Background::AnimatedGradient {
                    preset_key: key.to_string(),
                    gradient_sets: sets.to_vec(),
                    speed_ms: self.animated.speed_ms,
                    direction: self.animated.direction.clone(),
                }
            }
        }
    }
}

/// A partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<BackgroundMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_kind: Option<GradientKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_stops: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_gradient_sets: Option<Vec<Vec<String>>>,
}

impl BackgroundPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: BackgroundMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn gradient(mut self, kind: GradientKind, angle_degrees: f64, stops: Vec<String>) -> Self {
        self.gradient_kind = Some(kind);
        self.gradient_angle = Some(angle_degrees);
        self.color_stops = Some(stops);
        self
    }

    pub fn preset(mut self, key: impl Into<String>) -> Self {
        self.preset_key = Some(key.into());
        self
    }

    pub fn speed_ms(mut self, speed_ms: u64) -> Self {
        self.speed_ms = Some(speed_ms);
        self
    }

    pub fn custom_gradient_sets(mut self, sets: Vec<Vec<String>>) -> Self {
        self.custom_gradient_sets = Some(sets);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Parses a persisted record key by key. Keys that fail to decode are
    /// dropped with a warning instead of discarding the whole record.
    pub fn from_json_lenient(raw: &str) -> Self {
        let object = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                warn!("persisted background settings are not an object, using defaults");
                return Self::default();
            }
            Err(e) => {
                warn!(error = %e, "persisted background settings are not valid JSON, using defaults");
                return Self::default();
            }
        };

        let mut patch = Self::default();
        for (key, value) in object {
            let mut single = Map::new();
            single.insert(key.clone(), value);
            match serde_json::from_value::<Self>(Value::Object(single)) {
                Ok(field) => patch = patch.or(field),
                Err(e) => warn!(key = %key, error = %e, "dropping malformed background field"),
            }
        }
        patch
    }

    /// Fields set in `other` win over fields set in `self`.
    fn or(self, other: Self) -> Self {
        Self {
            mode: other.mode.or(self.mode),
            video_url: other.video_url.or(self.video_url),
            image_url: other.image_url.or(self.image_url),
            color: other.color.or(self.color),
            gradient_kind: other.gradient_kind.or(self.gradient_kind),
            gradient_angle: other.gradient_angle.or(self.gradient_angle),
            color_stops: other.color_stops.or(self.color_stops),
            preset_key: other.preset_key.or(self.preset_key),
            speed_ms: other.speed_ms.or(self.speed_ms),
            animation_direction: other.animation_direction.or(self.animation_direction),
            custom_gradient_sets: other.custom_gradient_sets.or(self.custom_gradient_sets),
        }
    }
}

/// What a renderer needs for the active mode, and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Background {
    Video {
        url: String,
    },
    Image {
        url: String,
    },
    Solid {
        color: String,
    },
    Gradient(GradientSettings),
    #[serde(rename_all = "camelCase")]
    AnimatedGradient {
        /// Key actually used after fallback.
        preset_key: String,
        gradient_sets: Vec<Vec<String>>,
        speed_ms: u64,
        direction: String,
    },
}

impl Background {
    pub fn mode(&self) -> BackgroundMode {
        match self {
            Background::Video { .. } => BackgroundMode::Video,
            Background::Image { .. } => BackgroundMode::Image,
            Background::Solid { .. } => BackgroundMode::Solid,
            Background::Gradient(_) => BackgroundMode::Gradient,
            Background::AnimatedGradient { .. } => BackgroundMode::AnimatedGradient,
        }
    }

    /// CSS `background` value. Video backgrounds are rendered by a media
    /// element and have none; animated gradients yield their first frame.
    pub fn css(&self) -> Option<String> {
        match self {
            Background::Video { .. } => None,
            Background::Image { url } => Some(format!("url(\"{url}\") center / cover no-repeat")),
            Background::Solid { color } => Some(color.clone()),
            Background::Gradient(g) => Some(gradient_css(g.kind, g.angle_degrees, &g.color_stops)),
            Background::AnimatedGradient { gradient_sets, .. } => gradient_sets
                .first()
                .map(|set| gradient_css(GradientKind::Linear, 135.0, set)),
        }
    }
}

fn gradient_css(kind: GradientKind, angle_degrees: f64, stops: &[String]) -> String {
    let stops = stops.join(", ");
    match kind {
        GradientKind::Linear => format!("linear-gradient({angle_degrees}deg, {stops})"),
        GradientKind::Radial => format!("radial-gradient(circle, {stops})"),
    }
}

/// Background preference, persisted as JSON under [`BACKGROUND_KEY`].
pub struct BackgroundStore {
    storage: SharedStore,
    settings: BackgroundSettings,
    presets: PresetCatalog,
}

impl std::fmt::Debug for BackgroundStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundStore")
            .field("settings", &self.settings)
            .finish()
    }
}

impl BackgroundStore {
    /// Loads the persisted record merged over the defaults.
    pub fn load(storage: SharedStore) -> Self {
        let settings = match persist::read(&storage, BACKGROUND_KEY) {
            Some(raw) => BackgroundSettings::from_json(&raw),
            None => BackgroundSettings::default(),
        };

        debug!(mode = settings.mode.as_str(), "background store initialized");
        Self {
            storage,
            settings,
            presets: PresetCatalog::builtin(),
        }
    }

    pub fn state(&self) -> &BackgroundSettings {
        &self.settings
    }

    pub fn presets(&self) -> &PresetCatalog {
        &self.presets
    }

    pub fn active(&self) -> Background {
        self.settings.active(&self.presets)
    }

    pub fn update_settings(&mut self, patch: BackgroundPatch) {
        if patch.is_empty() {
            return;
        }
        self.settings.apply(patch);
        persist::write(&self.storage, BACKGROUND_KEY, &self.settings.to_json());
        debug!(mode = self.settings.mode.as_str(), "background settings updated");
    }

    /// Restores the defaults and forgets the persisted record.
    pub fn reset_to_defaults(&mut self) {
        self.settings = BackgroundSettings::default();
        persist::remove(&self.storage, BACKGROUND_KEY);
        debug!("background settings reset");
    }
}
