//! Game state and core simulation types
//!
//! Everything the tick mutates lives in `GameState`; nothing is global.

use glam::Vec3;

use super::camera::ChaseCamera;
use super::world::World;
use crate::consts::*;
use crate::tuning::Tuning;

/// Vertical motion state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    /// Ground probe found a platform and no jump is in progress
    #[default]
    Grounded,
    /// Ground probe found nothing below; gravity accumulates
    Airborne,
    /// A jump is in progress; only a landing ends it
    Jumping,
}

/// The player sphere
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec3,
    /// Vertical velocity (units per tick, + is up)
    pub vel_y: f32,
    pub motion: Motion,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: PLAYER_START,
            vel_y: 0.0,
            motion: Motion::Grounded,
        }
    }
}

impl Player {
    pub fn at(pos: Vec3) -> Self {
        Self {
            pos,
            ..Default::default()
        }
    }

    pub fn is_jumping(&self) -> bool {
        self.motion == Motion::Jumping
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Static corridor geometry
    pub world: World,
    pub player: Player,
    pub camera: ChaseCamera,
    /// Set by the first jump; forward motion starts then
    pub started: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh run on the standard corridor
    pub fn new(tuning: &Tuning) -> Self {
        Self::with_world(World::build(), tuning)
    }

    /// Fresh run on a custom corridor
    pub fn with_world(world: World, tuning: &Tuning) -> Self {
        let player = Player::default();
        let mut camera = ChaseCamera::default();
        camera.follow(player.pos, tuning);
        Self {
            world,
            player,
            camera,
            started: false,
            time_ticks: 0,
        }
    }

    /// Distance covered along the corridor since the start line
    pub fn distance(&self) -> f32 {
        PLAYER_START.z - self.player.pos.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(&Tuning::default());
        assert_eq!(state.player.pos, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(state.player.vel_y, 0.0);
        assert_eq!(state.player.motion, Motion::Grounded);
        assert!(!state.started);
        assert_eq!(state.world.platforms.len(), SEGMENT_COUNT);
        assert_eq!(state.distance(), 0.0);
    }

    #[test]
    fn test_camera_starts_behind_player() {
        let state = GameState::new(&Tuning::default());
        let cam = state.camera.position;
        assert!((cam - Vec3::new(0.0, 3.0, 5.0)).length() < 1e-5);
    }
}
