//! Keyboard input tracking
//!
//! Two kinds of input reach the simulation:
//! - level-triggered flags (left/right held), read every tick
//! - edge-triggered events (jump press, camera turns), consumed once

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
    /// Turn the camera -90°
    TurnCamCw,
    /// Turn the camera +90°
    TurnCamCcw,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " => Some(Key::Jump),
            "c" => Some(Key::TurnCamCw),
            "v" => Some(Key::TurnCamCcw),
            _ => None,
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Jump was pressed since the last tick
    pub jump: bool,
    /// Net camera quarter turns since the last tick (+ is counterclockwise)
    pub turns: i32,
}

/// Held-key state plus queued one-shot events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    left: bool,
    right: bool,
    jump_held: bool,
    jump_pressed: bool,
    turns: i32,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down (auto-repeat included)
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Jump => {
                // Only the released -> pressed transition triggers a jump
                if !self.jump_held {
                    self.jump_pressed = true;
                }
                self.jump_held = true;
            }
            Key::TurnCamCw => self.turns = self.turns.wrapping_sub(1),
            Key::TurnCamCcw => self.turns = self.turns.wrapping_add(1),
        }
    }

    /// Key went up
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Jump => self.jump_held = false,
            Key::TurnCamCw | Key::TurnCamCcw => {}
        }
    }

    /// Release held keys (e.g. when the window loses focus). Queued presses
    /// and turns still reach the next tick.
    pub fn clear(&mut self) {
        self.left = false;
        self.right = false;
        self.jump_held = false;
    }

    /// Snapshot held flags without consuming queued events
    pub fn peek(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            jump: self.jump_pressed,
            turns: self.turns,
        }
    }

    /// Snapshot held flags and drain queued events
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = self.peek();
        self.jump_pressed = false;
        self.turns = 0;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_key_mapping() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom_key("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_dom_key(" "), Some(Key::Jump));
        assert_eq!(Key::from_dom_key("c"), Some(Key::TurnCamCw));
        assert_eq!(Key::from_dom_key("v"), Some(Key::TurnCamCcw));
        assert_eq!(Key::from_dom_key("ArrowUp"), None);
    }

    #[test]
    fn test_held_flags_follow_press_release() {
        let mut tracker = InputTracker::new();
        tracker.key_down(Key::Left);
        assert!(tracker.take_tick_input().left);
        // Held keys survive across ticks
        assert!(tracker.take_tick_input().left);
        tracker.key_up(Key::Left);
        assert!(!tracker.take_tick_input().left);
    }

    #[test]
    fn test_jump_is_edge_triggered() {
        let mut tracker = InputTracker::new();
        tracker.key_down(Key::Jump);
        assert!(tracker.take_tick_input().jump);

        // Auto-repeat while held does not re-trigger
        tracker.key_down(Key::Jump);
        assert!(!tracker.take_tick_input().jump);

        tracker.key_up(Key::Jump);
        tracker.key_down(Key::Jump);
        assert!(tracker.take_tick_input().jump);
    }

    #[test]
    fn test_tap_between_ticks_still_jumps() {
        let mut tracker = InputTracker::new();
        tracker.key_down(Key::Jump);
        tracker.key_up(Key::Jump);
        assert!(tracker.take_tick_input().jump);
        // Released, so the next press is a fresh edge
        tracker.key_down(Key::Jump);
        assert!(tracker.take_tick_input().jump);
    }

    #[test]
    fn test_camera_turns_accumulate_and_drain() {
        let mut tracker = InputTracker::new();
        tracker.key_down(Key::TurnCamCcw);
        tracker.key_down(Key::TurnCamCcw);
        tracker.key_down(Key::TurnCamCw);
        assert_eq!(tracker.peek().turns, 1);
        assert_eq!(tracker.take_tick_input().turns, 1);
        assert_eq!(tracker.take_tick_input().turns, 0);
    }

    #[test]
    fn test_clear_releases_held_keys() {
        let mut tracker = InputTracker::new();
        tracker.key_down(Key::Right);
        tracker.key_down(Key::Left);
        tracker.clear();
        assert_eq!(tracker.take_tick_input(), TickInput::default());
    }

    #[test]
    fn test_clear_keeps_queued_presses() {
        let mut tracker = InputTracker::new();
        tracker.key_down(Key::Right);
        tracker.key_down(Key::Jump);
        tracker.key_down(Key::TurnCamCcw);
        tracker.clear();

        let input = tracker.take_tick_input();
        assert!(!input.right);
        assert!(input.jump);
        assert_eq!(input.turns, 1);

        // Jump counts as released, so pressing again after focus returns jumps
        tracker.key_down(Key::Jump);
        assert!(tracker.take_tick_input().jump);
    }
}
