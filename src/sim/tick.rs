//! Fixed timestep simulation tick
//!
//! One tick: apply one-shot input, move the player, re-place the camera.

use super::input::{InputTracker, TickInput};
use super::motion::{integrate, try_jump};
use super::state::GameState;
use crate::consts::*;
use crate::tuning::Tuning;

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    state.time_ticks += 1;

    if input.jump {
        try_jump(&mut state.player, &mut state.started, tuning);
    }
    if input.turns != 0 {
        state.camera.rotate(input.turns);
        log::debug!("Camera heading {}°", state.camera.angle_deg);
    }

    integrate(
        &mut state.player,
        &state.world,
        input,
        state.started,
        tuning,
    );

    state.camera.follow(state.player.pos, tuning);
}

/// Accumulates frame time and runs whole simulation ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run as many ticks as `frame_dt` seconds cover (at most `MAX_SUBSTEPS`).
    /// One-shot input is drained into the first tick only. Returns ticks run.
    pub fn advance(
        &mut self,
        state: &mut GameState,
        tracker: &mut InputTracker,
        tuning: &Tuning,
        frame_dt: f32,
    ) -> u32 {
        // Clamp long stalls (tab in background, debugger)
        self.accumulator += frame_dt.clamp(0.0, 0.25);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = tracker.take_tick_input();
            tick(state, &input, tuning);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            // Drop the backlog instead of spiralling
            self.accumulator = 0.0;
        }
        substeps
    }
}
