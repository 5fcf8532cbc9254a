//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Input arrives as per-tick `TickInput` snapshots
//! - No rendering or platform dependencies

pub mod camera;
pub mod input;
pub mod motion;
pub mod probe;
pub mod state;
pub mod tick;
pub mod world;

pub use camera::ChaseCamera;
pub use input::{InputTracker, Key, TickInput};
pub use motion::{integrate, try_jump};
pub use probe::{nearest_platform_hit, platform_below, ray_aabb_entry};
pub use state::{GameState, Motion, Player};
pub use tick::{FixedStep, tick};
pub use world::{Aabb, Platform, Wall, World};
