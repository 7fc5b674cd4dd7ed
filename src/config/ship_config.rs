//! Ship configuration loaded from external RON file.
//!
//! Movement speed, screen margins, and cannon placement can be tuned
//! without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

use super::error::ConfigLoadError;
use crate::player::{CannonIndex, Margins};

/// Default location of the ship config, relative to the working directory.
pub const SHIP_CONFIG_PATH: &str = "assets/data/player/ship_config.ron";

/// Ship configuration loaded from assets/data/player/ship_config.ron.
#[derive(Resource, Clone, Debug, Deserialize)]
pub struct ShipConfig {
    /// Base movement speed in world units per second
    pub movement_speed: f32,
    /// Automatic stage scroll along world +Y, units per second
    pub scroll_speed: f32,
    /// On-screen travel box, in logical pixels from each viewport edge
    pub margins: Margins,
    /// Half size of the hull along world Y (length) and Z (height)
    pub hull_half_extents: (f32, f32),
    /// Distance from the ship plane to the side-view camera
    pub camera_distance: f32,
    /// Projectile flight speed in units per second
    pub projectile_speed: f32,
    /// Seconds before a projectile despawns
    pub projectile_lifetime: f32,
    /// Firing points by socket name, as offsets from the ship origin.
    /// The ship flies along +Y with +Z up, so its right side is +X.
    #[serde(default = "default_cannon_mounts")]
    pub cannon_mounts: HashMap<String, (f32, f32, f32)>,
}

fn default_cannon_mounts() -> HashMap<String, (f32, f32, f32)> {
    HashMap::from([
        (CannonIndex::Right.socket_name().to_string(), (60.0, 150.0, -20.0)),
        (CannonIndex::Left.socket_name().to_string(), (-60.0, 150.0, -20.0)),
        (CannonIndex::Top.socket_name().to_string(), (0.0, 100.0, 60.0)),
    ])
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            movement_speed: 2000.0,
            scroll_speed: 1000.0,
            margins: Margins::default(),
            hull_half_extents: (190.0, 90.0),
            camera_distance: 4000.0,
            projectile_speed: 4000.0,
            projectile_lifetime: 1.5,
            cannon_mounts: default_cannon_mounts(),
        }
    }
}

impl ShipConfig {
    /// Load ship config from the default RON file, falling back to defaults.
    pub fn load() -> Self {
        match Self::try_load(SHIP_CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded ship config from {}", SHIP_CONFIG_PATH);
                config
            }
            Err(e @ ConfigLoadError::ReadError { .. }) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Read, parse, and validate a ship config file.
    pub fn try_load(path: &str) -> Result<Self, ConfigLoadError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError::ReadError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron(path, &contents)
    }

    /// Parse and validate config text. `path` is only used in error messages.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = ron::from_str(contents).map_err(|e| ConfigLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        let positive = [
            ("movement_speed", self.movement_speed),
            ("camera_distance", self.camera_distance),
            ("projectile_speed", self.projectile_speed),
            ("projectile_lifetime", self.projectile_lifetime),
            ("hull_half_extents", self.hull_half_extents.0.min(self.hull_half_extents.1)),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigLoadError::Invalid {
                    field,
                    reason: format!("must be positive, got {}", value),
                });
            }
        }

        if self.scroll_speed < 0.0 {
            return Err(ConfigLoadError::Invalid {
                field: "scroll_speed",
                reason: format!("must not be negative, got {}", self.scroll_speed),
            });
        }

        let m = &self.margins;
        if [m.up, m.down, m.left, m.right].iter().any(|v| v.is_nan() || *v < 0.0) {
            return Err(ConfigLoadError::Invalid {
                field: "margins",
                reason: format!("must not be negative, got {:?}", m),
            });
        }

        Ok(())
    }

    /// Hull half size as (world Y, world Z).
    pub fn hull_half_extents(&self) -> Vec2 {
        Vec2::new(self.hull_half_extents.0, self.hull_half_extents.1)
    }

    /// Local transform of every configured firing point.
    pub fn mount_transforms(&self) -> HashMap<String, Transform> {
        self.cannon_mounts
            .iter()
            .map(|(name, &(x, y, z))| (name.clone(), Transform::from_xyz(x, y, z)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"(
        movement_speed: 1800.0,
        scroll_speed: 900.0,
        margins: (up: 30.0, down: 50.0, left: 10.0, right: 200.0),
        hull_half_extents: (150.0, 80.0),
        camera_distance: 3500.0,
        projectile_speed: 3000.0,
        projectile_lifetime: 2.0,
        cannon_mounts: {
            "RightCannon": (50.0, 120.0, 0.0),
        },
    )"#;

    #[test]
    fn test_parses_sample_config() {
        let config = ShipConfig::from_ron("sample.ron", SAMPLE).unwrap();
        assert_eq!(config.movement_speed, 1800.0);
        assert_eq!(config.margins.right, 200.0);
        assert_eq!(config.hull_half_extents(), Vec2::new(150.0, 80.0));
        assert_eq!(config.cannon_mounts.len(), 1);

        let mounts = config.mount_transforms();
        assert_eq!(mounts["RightCannon"].translation, Vec3::new(50.0, 120.0, 0.0));
    }

    #[test]
    fn test_missing_mounts_fall_back_to_defaults() {
        let text = r#"(
            movement_speed: 2000.0,
            scroll_speed: 1000.0,
            margins: (up: 40.0, down: 40.0, left: 20.0, right: 20.0),
            hull_half_extents: (190.0, 90.0),
            camera_distance: 4000.0,
            projectile_speed: 4000.0,
            projectile_lifetime: 1.5,
        )"#;
        let config = ShipConfig::from_ron("sample.ron", text).unwrap();
        for cannon in CannonIndex::ORDER {
            assert!(config.cannon_mounts.contains_key(cannon.socket_name()));
        }
    }

    #[test]
    fn test_rejects_negative_margin() {
        let text = SAMPLE.replace("up: 30.0", "up: -1.0");
        let err = ShipConfig::from_ron("sample.ron", &text).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid { field: "margins", .. }));
    }

    #[test]
    fn test_rejects_zero_speed() {
        let text = SAMPLE.replace("movement_speed: 1800.0", "movement_speed: 0.0");
        let err = ShipConfig::from_ron("sample.ron", &text).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid { field: "movement_speed", .. }));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let err = ShipConfig::from_ron("broken.ron", "(movement_speed: )").unwrap_err();
        assert!(matches!(err, ConfigLoadError::ParseError { .. }));
        assert!(err.to_string().contains("broken.ron"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = ShipConfig::try_load("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, ConfigLoadError::ReadError { .. }));
    }

    #[test]
    fn test_shipped_config_loads() {
        let config = ShipConfig::try_load(SHIP_CONFIG_PATH).unwrap();
        assert_eq!(config.movement_speed, 2000.0);
        for cannon in CannonIndex::ORDER {
            assert!(config.cannon_mounts.contains_key(cannon.socket_name()));
        }
    }

    #[test]
    fn test_right_cannon_sits_on_starboard_side() {
        // Facing +Y with +Z up puts the ship's right side on +X.
        let starboard = Vec3::Y.cross(Vec3::Z);
        assert_eq!(starboard, Vec3::X);

        let shipped = ShipConfig::try_load(SHIP_CONFIG_PATH).unwrap();
        for config in [ShipConfig::default(), shipped] {
            let right = config.cannon_mounts[CannonIndex::Right.socket_name()];
            let left = config.cannon_mounts[CannonIndex::Left.socket_name()];
            assert!(Vec3::new(right.0, right.1, right.2).dot(starboard) > 0.0);
            assert!(Vec3::new(left.0, left.1, left.2).dot(starboard) < 0.0);
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(ShipConfig::default().validate().is_ok());
    }
}
