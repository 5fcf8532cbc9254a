//! Static corridor geometry
//!
//! The corridor is built once at startup and never changes: a row of
//! platform segments stepping along -Z, each flanked by two walls.

use glam::Vec3;

use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box of the given full `size` centred on `center`
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }
}

/// A floor slab the player can stand on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub pos: Vec3,
}

impl Platform {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, PLATFORM_SIZE)
    }
}

/// A side wall. Purely visual; nothing collides with walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub pos: Vec3,
}

/// The whole corridor (platforms sorted from the start line forward)
#[derive(Debug, Clone)]
pub struct World {
    pub platforms: Vec<Platform>,
    pub walls: Vec<Wall>,
}

impl Default for World {
    fn default() -> Self {
        Self::build()
    }
}

impl World {
    /// Build the standard corridor of `SEGMENT_COUNT` segments
    pub fn build() -> Self {
        Self::with_segments(SEGMENT_COUNT)
    }

    /// Build a corridor of `count` segments starting at the origin
    pub fn with_segments(count: usize) -> Self {
        let mut world = Self {
            platforms: Vec::with_capacity(count),
            walls: Vec::with_capacity(count * 2),
        };
        for i in 0..count {
            world.add_segment(Vec3::new(0.0, 0.0, -(i as f32) * SEGMENT_SPACING));
        }
        log::debug!(
            "Built corridor: {} platforms, {} walls",
            world.platforms.len(),
            world.walls.len()
        );
        world
    }

    /// Add one platform at `origin` and its pair of walls
    fn add_segment(&mut self, origin: Vec3) {
        self.platforms.push(Platform { pos: origin });
        self.walls.push(Wall {
            pos: origin + Vec3::new(-WALL_OFFSET_X, WALL_OFFSET_Y, 0.0),
        });
        self.walls.push(Wall {
            pos: origin + Vec3::new(WALL_OFFSET_X, WALL_OFFSET_Y, 0.0),
        });
    }

    /// Far edge of the last platform along -Z (no ground past this)
    pub fn end_z(&self) -> Option<f32> {
        self.platforms
            .iter()
            .map(|p| p.bounds().min.z)
            .min_by(|a, b| a.total_cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_corridor_counts() {
        let world = World::build();
        assert_eq!(world.platforms.len(), 100);
        assert_eq!(world.walls.len(), 200);
    }

    #[test]
    fn test_segment_layout() {
        let world = World::build();
        assert_eq!(world.platforms[0].pos, Vec3::ZERO);
        assert_eq!(world.platforms[1].pos, Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(world.platforms[99].pos, Vec3::new(0.0, 0.0, -198.0));

        // Walls flank each platform, raised to stand on it
        assert_eq!(world.walls[0].pos, Vec3::new(-7.5, 5.0, 0.0));
        assert_eq!(world.walls[1].pos, Vec3::new(7.5, 5.0, 0.0));
        assert_eq!(world.walls[199].pos, Vec3::new(7.5, 5.0, -198.0));
    }

    #[test]
    fn test_platform_bounds() {
        let platform = Platform { pos: Vec3::ZERO };
        let bounds = platform.bounds();
        assert!((bounds.max.y - 0.05).abs() < 1e-6);
        assert!((bounds.min.x + 7.5).abs() < 1e-6);
        assert!((bounds.max.z - 5.0).abs() < 1e-6);
        assert!((bounds.min.y + 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_end_of_corridor() {
        let world = World::build();
        let end = world.end_z().unwrap();
        assert!((end + 203.0).abs() < 1e-4);
        assert!(World::with_segments(0).end_z().is_none());
    }
}
