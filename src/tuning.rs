//! Data-driven movement and camera constants
//!
//! Defaults reproduce the stock feel of the run. An override can be stored
//! as JSON in LocalStorage; missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Movement, probe and camera constants (movement values are per tick)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Movement ===
    /// Distance travelled along -Z each tick once the run has started
    pub forward_speed: f32,
    /// Sideways offset per tick while left/right is held
    pub strafe_step: f32,
    /// Added to vertical velocity each tick with no ground below (negative)
    pub gravity: f32,
    /// Vertical velocity set by a jump
    pub jump_strength: f32,
    /// Height the player snaps to on landing
    pub standing_height: f32,

    // === Ground probe ===
    /// Max hit distance for a platform to count as ground
    pub probe_distance: f32,

    // === Camera ===
    pub camera_radius: f32,
    pub camera_height: f32,
    pub camera_fov_deg: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            forward_speed: FORWARD_SPEED,
            strafe_step: STRAFE_STEP,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            standing_height: STANDING_HEIGHT,

            probe_distance: GROUND_PROBE_DISTANCE,

            camera_radius: CAMERA_RADIUS,
            camera_height: CAMERA_HEIGHT,
            camera_fov_deg: CAMERA_FOV_DEG,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot make sense of
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("forward_speed", self.forward_speed),
            ("strafe_step", self.strafe_step),
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("standing_height", self.standing_height),
            ("probe_distance", self.probe_distance),
            ("camera_radius", self.camera_radius),
            ("camera_height", self.camera_height),
            ("camera_fov_deg", self.camera_fov_deg),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(invalid(field, format!("{value} is not finite")));
            }
        }

        if self.forward_speed < 0.0 {
            return Err(invalid("forward_speed", "must not be negative"));
        }
        if self.strafe_step < 0.0 {
            return Err(invalid("strafe_step", "must not be negative"));
        }
        if self.gravity >= 0.0 {
            return Err(invalid("gravity", "must pull down (negative)"));
        }
        if self.jump_strength <= 0.0 {
            return Err(invalid("jump_strength", "must be positive"));
        }
        if self.probe_distance <= 0.0 {
            return Err(invalid("probe_distance", "must be positive"));
        }
        if self.camera_radius <= 0.0 {
            return Err(invalid("camera_radius", "must be positive"));
        }
        if !(1.0..180.0).contains(&self.camera_fov_deg) {
            return Err(invalid("camera_fov_deg", "must be within [1, 180)"));
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &str = "corridor_run_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> Error {
    Error::InvalidTuning {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.gravity, -0.02);
        assert_eq!(tuning.jump_strength, 0.5);
        assert_eq!(tuning.forward_speed, 0.2);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "forward_speed": 0.3 }"#).unwrap();
        assert_eq!(tuning.forward_speed, 0.3);
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.camera_radius, CAMERA_RADIUS);
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let err = Tuning::from_json(r#"{ "gravity": 0.02 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidTuning { field: "gravity", .. }));
    }

    #[test]
    fn test_rejects_non_finite() {
        let tuning = Tuning {
            strafe_step: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(Error::InvalidTuning { field: "strafe_step", .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::TuningFormat(_)));
    }
}
