//! Corridor Run - a 3D runner down a corridor of platforms
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, ground probe, camera, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven movement and camera constants
//! - `error`: Crate error type for the fallible edges (tuning, GPU setup)

pub mod error;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Fixed simulation timestep. Movement constants are per tick, tuned for 60 Hz.
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Player sphere
    pub const PLAYER_RADIUS: f32 = 0.5;
    pub const PLAYER_START: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    /// Movement defaults (units per tick)
    pub const FORWARD_SPEED: f32 = 0.2;
    pub const STRAFE_STEP: f32 = 0.1;
    pub const GRAVITY: f32 = -0.02;
    pub const JUMP_STRENGTH: f32 = 0.5;
    /// Resting height of the player's centre above the corridor origin
    pub const STANDING_HEIGHT: f32 = 1.0;
    /// Max distance from the player's centre to a platform surface to count as ground
    pub const GROUND_PROBE_DISTANCE: f32 = 1.0;

    /// Corridor layout
    pub const SEGMENT_COUNT: usize = 100;
    pub const SEGMENT_SPACING: f32 = 2.0;
    pub const PLATFORM_SIZE: Vec3 = Vec3::new(15.0, 0.1, 10.0);
    pub const WALL_SIZE: Vec3 = Vec3::new(0.1, 10.0, 10.0);
    /// Walls sit at the platform edges, raised so their base is at platform height
    pub const WALL_OFFSET_X: f32 = 7.5;
    pub const WALL_OFFSET_Y: f32 = 5.0;

    /// Chase camera defaults
    pub const CAMERA_RADIUS: f32 = 5.0;
    pub const CAMERA_HEIGHT: f32 = 2.0;
    pub const CAMERA_FOV_DEG: f32 = 75.0;
    pub const CAMERA_NEAR: f32 = 0.1;
    pub const CAMERA_FAR: f32 = 1000.0;
    /// One discrete camera turn
    pub const CAMERA_STEP_DEG: i32 = 90;
}

/// Unit vector pointing down (the ground probe direction)
pub const DOWN: glam::Vec3 = glam::Vec3::NEG_Y;

/// Normalize whole degrees to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Offset on the horizontal plane for a chase position at `radius` and `degrees`.
/// 0° sits behind the player on +Z, 90° on +X.
#[inline]
pub fn orbit_offset(radius: f32, degrees: i32) -> glam::Vec3 {
    let theta = (normalize_degrees(degrees) as f32).to_radians();
    glam::Vec3::new(radius * theta.sin(), 0.0, radius * theta.cos())
}
