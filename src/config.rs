//! Gameplay dimensions and layout tuning
//!
//! All sizes are in world units. The sim reads widths for landing
//! tolerances; the remaining extents are data for whatever renders the
//! session.

use serde::{Deserialize, Serialize};

/// Layout presets for different display footprints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LayoutPreset {
    #[default]
    Standard,
    /// Tighter dimensions for constrained-size layouts
    Compact,
}

impl LayoutPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutPreset::Standard => "Standard",
            LayoutPreset::Compact => "Compact",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(LayoutPreset::Standard),
            "compact" | "mobile" => Some(LayoutPreset::Compact),
            _ => None,
        }
    }
}

/// Dimension and placement tuning for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Platform extent along the travel axes
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_depth: f32,
    /// Actor extent along the travel axes
    pub actor_width: f32,
    pub actor_height: f32,
    pub actor_depth: f32,
    /// Base center-to-center distance to the next platform
    pub step_base: f32,
    /// World height of the floor a missed jump falls to
    pub ground: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform_width: 4.0,
            platform_height: 2.0,
            platform_depth: 4.0,
            actor_width: 1.0,
            actor_height: 2.0,
            actor_depth: 1.0,
            step_base: 6.0,
            ground: -1.0,
        }
    }
}

impl Config {
    /// Create a config from a layout preset
    pub fn from_preset(preset: LayoutPreset) -> Self {
        match preset {
            LayoutPreset::Standard => Self::default(),
            LayoutPreset::Compact => Self {
                platform_width: 3.0,
                platform_height: 1.8,
                platform_depth: 3.0,
                actor_width: 0.8,
                actor_height: 1.8,
                actor_depth: 0.8,
                step_base: 4.0,
                ground: -1.0,
            },
        }
    }

    /// Parse a config from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Maximum center-to-center distance still counted as on a platform
    pub fn landing_tolerance(&self) -> f32 {
        (self.actor_width + self.platform_width) / 2.0
    }

    /// Half the platform width, the center/edge boundary
    pub fn platform_half_width(&self) -> f32 {
        self.platform_width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_dimensions() {
        let standard = Config::from_preset(LayoutPreset::Standard);
        assert_eq!(standard.step_base, 6.0);
        assert_eq!(standard.landing_tolerance(), 2.5);
        assert_eq!(standard.platform_half_width(), 2.0);

        let compact = Config::from_preset(LayoutPreset::Compact);
        assert_eq!(compact.step_base, 4.0);
        assert!(compact.platform_width < standard.platform_width);
        assert_eq!(compact.ground, standard.ground);
    }

    #[test]
    fn test_preset_round_trip() {
        assert_eq!(LayoutPreset::from_str("compact"), Some(LayoutPreset::Compact));
        assert_eq!(
            LayoutPreset::from_str(LayoutPreset::Standard.as_str()),
            Some(LayoutPreset::Standard)
        );
        assert_eq!(LayoutPreset::from_str("tiny"), None);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "platform_width": 3.0,
            "platform_height": 1.8,
            "platform_depth": 3.0,
            "actor_width": 2.0,
            "actor_height": 1.8,
            "actor_depth": 0.8,
            "step_base": 4.0,
            "ground": -1.0
        }"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.landing_tolerance(), 2.5);
        assert_eq!(config.platform_half_width(), 1.5);
        assert!(Config::from_json("{").is_err());
    }
}
