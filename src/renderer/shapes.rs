//! Mesh and instance generation for the scene

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::vertex::{Instance, Vertex, colors};
use crate::consts::*;
use crate::sim::{Player, World};

/// Sphere tessellation (matches the player mesh density)
pub const SPHERE_SEGMENTS: u32 = 16;
pub const SPHERE_RINGS: u32 = 16;

/// Unit cube centred on the origin
pub fn cube() -> (Vec<Vertex>, Vec<u16>) {
    let p = 0.5_f32;
    #[rustfmt::skip]
    let vertices = vec![
        // +Z
        Vertex::new(-p, -p,  p), Vertex::new( p, -p,  p), Vertex::new( p,  p,  p), Vertex::new(-p,  p,  p),
        // -Z
        Vertex::new( p, -p, -p), Vertex::new(-p, -p, -p), Vertex::new(-p,  p, -p), Vertex::new( p,  p, -p),
        // +X
        Vertex::new( p, -p,  p), Vertex::new( p, -p, -p), Vertex::new( p,  p, -p), Vertex::new( p,  p,  p),
        // -X
        Vertex::new(-p, -p, -p), Vertex::new(-p, -p,  p), Vertex::new(-p,  p,  p), Vertex::new(-p,  p, -p),
        // +Y
        Vertex::new(-p,  p,  p), Vertex::new( p,  p,  p), Vertex::new( p,  p, -p), Vertex::new(-p,  p, -p),
        // -Y
        Vertex::new(-p, -p, -p), Vertex::new( p, -p, -p), Vertex::new( p, -p,  p), Vertex::new(-p, -p,  p),
    ];
    let indices = (0..6u16)
        .flat_map(|face| {
            let b = face * 4;
            [b, b + 1, b + 2, b + 2, b + 3, b]
        })
        .collect();
    (vertices, indices)
}

/// UV sphere of `radius` centred on the origin
pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> (Vec<Vertex>, Vec<u16>) {
    let segments = segments.max(3);
    let rings = rings.max(2);

    let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    for iy in 0..=rings {
        let v = iy as f32 / rings as f32;
        let phi = v * PI;
        for ix in 0..=segments {
            let u = ix as f32 / segments as f32;
            let theta = u * TAU;
            vertices.push(Vertex::new(
                -radius * theta.cos() * phi.sin(),
                radius * phi.cos(),
                radius * theta.sin() * phi.sin(),
            ));
        }
    }

    // Pole rows collapse to a point, so emit one triangle per quad there
    let row = segments + 1;
    let mut indices = Vec::with_capacity((segments * rings * 6) as usize);
    for iy in 0..rings {
        for ix in 0..segments {
            let a = (iy * row + ix + 1) as u16;
            let b = (iy * row + ix) as u16;
            let c = ((iy + 1) * row + ix) as u16;
            let d = ((iy + 1) * row + ix + 1) as u16;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != rings - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    (vertices, indices)
}

/// Instances for the static corridor: platforms first, then walls
pub fn world_instances(world: &World) -> Vec<Instance> {
    let platforms = world
        .platforms
        .iter()
        .map(|p| Instance::new(p.pos, PLATFORM_SIZE, colors::PLATFORM));
    let walls = world
        .walls
        .iter()
        .map(|w| Instance::new(w.pos, WALL_SIZE, colors::WALL));
    platforms.chain(walls).collect()
}

/// Instance for the player sphere (the sphere mesh already has the player radius)
pub fn player_instance(player: &Player) -> Instance {
    Instance::new(player.pos, Vec3::ONE, colors::PLAYER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_mesh() {
        let (vertices, indices) = cube();
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
        assert!(vertices
            .iter()
            .all(|v| v.position.iter().all(|c| c.abs() == 0.5)));
    }

    #[test]
    fn test_sphere_mesh() {
        let (vertices, indices) = uv_sphere(PLAYER_RADIUS, SPHERE_SEGMENTS, SPHERE_RINGS);
        assert_eq!(vertices.len(), 17 * 17);
        // Two triangles per quad, minus one per quad on each pole row
        assert_eq!(indices.len(), (16 * 16 * 2 - 2 * 16) * 3);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
        for v in &vertices {
            let r = Vec3::from_array(v.position).length();
            assert!((r - PLAYER_RADIUS).abs() < 1e-5);
        }
    }

    #[test]
    fn test_world_instances() {
        let world = World::build();
        let instances = world_instances(&world);
        assert_eq!(instances.len(), 300);
        assert_eq!(instances[0].color, colors::PLATFORM);
        assert_eq!(instances[100].color, colors::WALL);

        // Translation lives in the last column, scale on the diagonal
        let wall = instances[100].model;
        assert_eq!(wall[3][0], -7.5);
        assert_eq!(wall[3][1], 5.0);
        assert!((wall[0][0] - 0.1).abs() < 1e-6);
        assert_eq!(wall[1][1], 10.0);
    }

    #[test]
    fn test_player_instance_tracks_position() {
        let player = Player::at(Vec3::new(1.0, 2.0, -3.0));
        let inst = player_instance(&player);
        assert_eq!(inst.model[3], [1.0, 2.0, -3.0, 1.0]);
        assert_eq!(inst.color, colors::PLAYER);
    }
}
