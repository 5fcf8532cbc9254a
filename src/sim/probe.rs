//! Ground probe
//!
//! A ray cast straight down from the player's centre against the platform
//! boxes. The player counts as standing on something when the nearest hit is
//! within the probe distance.

use glam::Vec3;

use super::world::{Aabb, World};
use crate::DOWN;

/// Distance along `dir` at which a ray from `origin` enters `aabb`.
///
/// Only entering hits count: a ray starting inside the box (or pointing away
/// from it) returns `None`.
pub fn ray_aabb_entry(origin: Vec3, dir: Vec3, aabb: &Aabb) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    for i in 0..3 {
        let s = origin[i];
        let d = dir[i];
        if d.abs() < 1e-8 {
            // Parallel to this slab: must already be between its planes
            if s < aabb.min[i] || s > aabb.max[i] {
                return None;
            }
        } else {
            let inv = 1.0 / d;
            let mut t0 = (aabb.min[i] - s) * inv;
            let mut t1 = (aabb.max[i] - s) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }
    }
    (t_enter >= 0.0 && t_enter.is_finite()).then_some(t_enter)
}

/// Distance from `origin` down to the nearest platform surface, if any
pub fn nearest_platform_hit(world: &World, origin: Vec3) -> Option<f32> {
    world
        .platforms
        .iter()
        .filter_map(|p| ray_aabb_entry(origin, DOWN, &p.bounds()))
        .min_by(|a, b| a.total_cmp(b))
}

/// True iff a platform surface lies below `position` within `max_distance`
pub fn platform_below(world: &World, position: Vec3, max_distance: f32) -> bool {
    nearest_platform_hit(world, position).is_some_and(|d| d <= max_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GROUND_PROBE_DISTANCE;
    use proptest::prelude::*;

    fn unit_box() -> Aabb {
        Aabb::from_center_size(Vec3::ZERO, Vec3::ONE)
    }

    #[test]
    fn test_ray_hits_top_face() {
        let t = ray_aabb_entry(Vec3::new(0.0, 3.0, 0.0), DOWN, &unit_box()).unwrap();
        assert!((t - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_ray_misses_beside_box() {
        assert!(ray_aabb_entry(Vec3::new(2.0, 3.0, 0.0), DOWN, &unit_box()).is_none());
    }

    #[test]
    fn test_ray_from_inside_or_below_misses() {
        assert!(ray_aabb_entry(Vec3::ZERO, DOWN, &unit_box()).is_none());
        assert!(ray_aabb_entry(Vec3::new(0.0, -2.0, 0.0), DOWN, &unit_box()).is_none());
    }

    #[test]
    fn test_standing_player_is_grounded() {
        let world = World::build();
        // Player centre at 1.0, platform top at 0.05
        let d = nearest_platform_hit(&world, Vec3::new(0.0, 1.0, 0.0)).unwrap();
        assert!((d - 0.95).abs() < 1e-5);
        assert!(platform_below(&world, Vec3::new(0.0, 1.0, 0.0), GROUND_PROBE_DISTANCE));
    }

    #[test]
    fn test_too_high_is_not_grounded() {
        let world = World::build();
        assert!(!platform_below(&world, Vec3::new(0.0, 1.5, -10.0), GROUND_PROBE_DISTANCE));
    }

    #[test]
    fn test_off_the_side_is_not_grounded() {
        let world = World::build();
        assert!(nearest_platform_hit(&world, Vec3::new(8.0, 1.0, 0.0)).is_none());
        assert!(!platform_below(&world, Vec3::new(-8.0, 1.0, 0.0), GROUND_PROBE_DISTANCE));
    }

    #[test]
    fn test_past_the_end_is_not_grounded() {
        let world = World::build();
        assert!(platform_below(&world, Vec3::new(0.0, 1.0, -202.0), GROUND_PROBE_DISTANCE));
        assert!(!platform_below(&world, Vec3::new(0.0, 1.0, -204.0), GROUND_PROBE_DISTANCE));
    }

    proptest! {
        #[test]
        fn probe_is_idempotent(
            x in -10.0f32..10.0,
            y in -2.0f32..4.0,
            z in -210.0f32..10.0,
        ) {
            let world = World::build();
            let pos = Vec3::new(x, y, z);
            prop_assert_eq!(
                platform_below(&world, pos, GROUND_PROBE_DISTANCE),
                platform_below(&world, pos, GROUND_PROBE_DISTANCE)
            );
            prop_assert_eq!(
                nearest_platform_hit(&world, pos),
                nearest_platform_hit(&world, pos)
            );
        }

        #[test]
        fn hit_distance_matches_height_over_deck(
            x in -7.0f32..7.0,
            y in 0.1f32..5.0,
            z in -200.0f32..0.0,
        ) {
            let world = World::build();
            let d = nearest_platform_hit(&world, Vec3::new(x, y, z)).unwrap();
            prop_assert!((d - (y - 0.05)).abs() < 1e-4);
        }
    }
}
