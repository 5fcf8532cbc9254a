//! Chase camera
//!
//! Orbits the player at a fixed radius and height. The orbit angle only
//! changes in whole quarter turns.

use glam::{Mat4, Vec3};

use crate::consts::*;
use crate::tuning::Tuning;
use crate::{normalize_degrees, orbit_offset};

#[derive(Debug, Clone)]
pub struct ChaseCamera {
    /// Orbit angle in degrees, a multiple of 90 kept in [0, 360)
    pub angle_deg: i32,
    pub position: Vec3,
    /// Point the camera looks at (the player)
    pub target: Vec3,
    pub fov_deg: f32,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            angle_deg: 0,
            position: PLAYER_START + Vec3::new(0.0, CAMERA_HEIGHT, CAMERA_RADIUS),
            target: PLAYER_START,
            fov_deg: CAMERA_FOV_DEG,
        }
    }
}

impl ChaseCamera {
    /// Turn by `quarter_turns` × 90° (+ is counterclockwise seen from above)
    pub fn rotate(&mut self, quarter_turns: i32) {
        // Only a quarter turn count mod 4 can change the heading
        let step = quarter_turns.rem_euclid(4) * CAMERA_STEP_DEG;
        self.angle_deg = normalize_degrees(self.angle_deg + step);
    }

    /// Re-place the camera around `target` and aim at it
    pub fn follow(&mut self, target: Vec3, tuning: &Tuning) {
        self.position = target
            + orbit_offset(tuning.camera_radius, self.angle_deg)
            + Vec3::new(0.0, tuning.camera_height, 0.0);
        self.target = target;
        self.fov_deg = tuning.camera_fov_deg;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), aspect, CAMERA_NEAR, CAMERA_FAR)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
