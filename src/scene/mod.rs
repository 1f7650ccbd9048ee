//! Static scene content: which mesh sits where, and the particle field.
//!
//! Everything here is derived from [`Options`] alone and only changes when
//! the layout or particle options do.

/// Procedural section meshes.
pub mod geometry;
/// Seeded particle scattering.
pub mod particles;

use glam::Vec3;

use self::geometry::{SectionShape, SECTION_SHAPES};
use crate::options::Options;

/// One section's mesh and its fixed world position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMesh {
    /// Shape to draw.
    pub shape: SectionShape,
    /// World-space position.
    pub position: Vec3,
}

/// Placement of every section mesh plus the particle positions.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    /// Section meshes, top to bottom.
    pub meshes: Vec<SectionMesh>,
    /// Particle centers.
    pub particles: Vec<Vec3>,
}

impl SceneLayout {
    /// Number of sections (and meshes).
    pub const SECTION_COUNT: usize = SECTION_SHAPES.len();

    /// Lay out the scene for `options`.
    ///
    /// Section `i` sits `i * object_spacing` below the origin and alternates
    /// right, left, right by `side_offset`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let spacing = options.layout.object_spacing;
        let side = options.layout.side_offset;
        let meshes = SECTION_SHAPES
            .iter()
            .enumerate()
            .map(|(i, &shape)| {
                let x = if i % 2 == 0 { side } else { -side };
                SectionMesh {
                    shape,
                    position: Vec3::new(x, -spacing * i as f32, 0.0),
                }
            })
            .collect();
        let particles = particles::scatter(
            options.particles.count,
            spacing,
            Self::SECTION_COUNT,
            options.particles.spread,
            options.particles.seed,
        );
        Self { meshes, particles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let layout = SceneLayout::new(&Options::default());
        let positions: Vec<Vec3> =
            layout.meshes.iter().map(|m| m.position).collect();
        assert_eq!(
            positions,
            vec![
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(-2.0, -4.0, 0.0),
                Vec3::new(2.0, -8.0, 0.0),
            ]
        );
        assert_eq!(layout.meshes[1].shape, SectionShape::Cone);
        assert_eq!(layout.particles.len(), 200);
    }

    #[test]
    fn spacing_moves_meshes_and_particles() {
        let mut options = Options::default();
        options.layout.object_spacing = 6.0;
        let layout = SceneLayout::new(&options);
        assert_eq!(layout.meshes[2].position.y, -12.0);
        assert!(layout.particles.iter().all(|p| p.y <= 3.0 && p.y > -15.0));
    }
}
