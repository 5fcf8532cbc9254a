//! Player motion integration
//!
//! Per-tick movement: constant forward speed, linear gravity, jump impulse
//! and a landing clamp, all gated by the ground probe.

use super::input::TickInput;
use super::probe::platform_below;
use super::state::{Motion, Player};
use super::world::World;
use crate::tuning::Tuning;

/// Apply a jump press. Returns true if the jump was taken.
///
/// Ignored while a jump is already in progress. The first accepted jump also
/// starts the run.
pub fn try_jump(player: &mut Player, started: &mut bool, tuning: &Tuning) -> bool {
    if player.is_jumping() {
        return false;
    }
    player.vel_y = tuning.jump_strength;
    player.motion = Motion::Jumping;
    if !*started {
        *started = true;
        log::info!("Run started");
    }
    true
}

/// Advance the player by one tick
pub fn integrate(
    player: &mut Player,
    world: &World,
    input: &TickInput,
    started: bool,
    tuning: &Tuning,
) {
    if started {
        player.pos.z -= tuning.forward_speed;
    }

    let mut jumping = player.is_jumping();

    let ground_below = platform_below(world, player.pos, tuning.probe_distance);
    if !ground_below {
        player.vel_y += tuning.gravity;
    } else if !jumping {
        player.vel_y = 0.0;
    }

    player.pos.y += player.vel_y;

    // Landing clamp: never sink below standing height onto a platform
    let mut landed = false;
    if player.pos.y <= tuning.standing_height
        && platform_below(world, player.pos, tuning.probe_distance)
    {
        player.pos.y = tuning.standing_height;
        player.vel_y = 0.0;
        jumping = false;
        landed = true;
    }

    if input.left {
        player.pos.x -= tuning.strafe_step;
    }
    if input.right {
        player.pos.x += tuning.strafe_step;
    }

    let next = if jumping {
        Motion::Jumping
    } else if ground_below || landed {
        Motion::Grounded
    } else {
        Motion::Airborne
    };
    if next != player.motion {
        log::debug!(
            "Player {:?} -> {:?} at ({:.2}, {:.2}, {:.2})",
            player.motion,
            next,
            player.pos.x,
            player.pos.y,
            player.pos.z
        );
        player.motion = next;
    }
}
