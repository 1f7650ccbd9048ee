//! Procedural meshes for the three section shapes.
//!
//! Parameterizations match the usual torus / cone / (p, q) torus knot
//! constructions, so segment counts map one-to-one onto vertex rings.

use std::f32::consts::TAU;

use glam::Vec3;

// ==================== VERTEX FORMAT ====================

/// 24-byte mesh vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit object-space normal.
    pub normal: [f32; 3],
}

impl Vertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        }
    }
}

/// Vertex buffer layout for [`Vertex`]: position at location 0, normal at 1.
pub fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    }
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertices.
    pub vertices: Vec<Vertex>,
    /// Triangle indices into [`vertices`](Self::vertices).
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

// ==================== SHAPES ====================

/// The shape shown in one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionShape {
    /// Ring torus.
    Torus,
    /// Closed-bottom cone, apex up.
    Cone,
    /// (2, 3) torus knot.
    TorusKnot,
}

/// Shapes in section order, top to bottom.
pub const SECTION_SHAPES: [SectionShape; 3] =
    [SectionShape::Torus, SectionShape::Cone, SectionShape::TorusKnot];

impl SectionShape {
    /// Generate this shape's mesh at its standard size.
    #[must_use]
    pub fn mesh(self) -> MeshData {
        match self {
            Self::Torus => torus(1.0, 0.4, 16, 60),
            Self::Cone => cone(1.0, 2.0, 32),
            Self::TorusKnot => torus_knot(0.8, 0.35, 100, 16, 2, 3),
        }
    }
}

/// Quad-strip indices for a `(rows + 1) × (cols + 1)` vertex grid, two
/// triangles per cell.
fn grid_indices(rows: u32, cols: u32) -> Vec<u32> {
    let stride = cols + 1;
    let mut indices = Vec::with_capacity((rows * cols * 6) as usize);
    for j in 1..=rows {
        for i in 1..=cols {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    indices
}

/// Torus in the XY plane around the Z axis.
///
/// `radius` is from the center to the middle of the tube; `tube` is the
/// tube radius.
#[must_use]
pub fn torus(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> MeshData {
    let mut vertices = Vec::with_capacity(
        ((radial_segments + 1) * (tubular_segments + 1)) as usize,
    );
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            vertices.push(Vertex::new(position, position - center));
        }
    }
    MeshData {
        vertices,
        indices: grid_indices(radial_segments, tubular_segments),
    }
}

/// Cone centered on the origin with its apex at `+height / 2` and a closed
/// base of `radius` at `-height / 2`.
#[must_use]
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let half = height / 2.0;
    let slope = radius / height;
    let ring = radial_segments + 1;
    let mut vertices = Vec::with_capacity((ring * 2 + ring + radial_segments) as usize);
    let mut indices = Vec::with_capacity((radial_segments * 6) as usize);

    // Side: apex row then base row. The apex is duplicated per segment so
    // each slice gets its own smooth normal.
    for (row_radius, y) in [(0.0, half), (radius, -half)] {
        for x in 0..=radial_segments {
            let theta = x as f32 / radial_segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            vertices.push(Vertex::new(
                Vec3::new(row_radius * sin, y, row_radius * cos),
                Vec3::new(sin, slope, cos),
            ));
        }
    }
    for x in 0..radial_segments {
        // Apex triangles are degenerate on the top row; only the lower
        // half of each quad survives.
        let b = ring + x;
        let c = ring + x + 1;
        let d = x + 1;
        indices.extend_from_slice(&[b, c, d]);
    }

    // Base cap: one center vertex per segment, then the rim.
    let center_start = vertices.len() as u32;
    for _ in 0..radial_segments {
        vertices.push(Vertex::new(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y));
    }
    let rim_start = vertices.len() as u32;
    for x in 0..=radial_segments {
        let theta = x as f32 / radial_segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        vertices.push(Vertex::new(
            Vec3::new(radius * sin, -half, radius * cos),
            Vec3::NEG_Y,
        ));
    }
    for x in 0..radial_segments {
        let c = center_start + x;
        let i = rim_start + x;
        indices.extend_from_slice(&[i + 1, i, c]);
    }

    MeshData { vertices, indices }
}

fn knot_point(u: f32, p: u32, q: u32, radius: f32) -> Vec3 {
    let qu_over_p = q as f32 / p as f32 * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}

/// A tube swept along a (p, q) torus knot.
#[must_use]
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let mut vertices = Vec::with_capacity(
        ((tubular_segments + 1) * (radial_segments + 1)) as usize,
    );
    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p as f32 * TAU;
        let p1 = knot_point(u, p, q, radius);
        let p2 = knot_point(u + 0.01, p, q, radius);

        // Frenet-like frame from the curve tangent.
        let tangent = p2 - p1;
        let binormal = tangent.cross(p2 + p1).normalize_or_zero();
        let normal = binormal.cross(tangent).normalize_or_zero();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let position =
                p1 + normal * (-tube * v.cos()) + binormal * (tube * v.sin());
            vertices.push(Vertex::new(position, position - p1));
        }
    }
    MeshData {
        vertices,
        indices: grid_indices(tubular_segments, radial_segments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(mesh: &MeshData) {
        assert_eq!(mesh.indices.len() % 3, 0);
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
        for v in &mesh.vertices {
            let len = Vec3::from_array(v.normal).length();
            assert!((len - 1.0).abs() < 1e-4, "normal length {len}");
        }
    }

    #[test]
    fn vertex_is_24_bytes() {
        assert_eq!(size_of::<Vertex>(), 24);
    }

    #[test]
    fn torus_counts() {
        let mesh = SectionShape::Torus.mesh();
        assert_eq!(mesh.vertices.len(), 17 * 61);
        assert_eq!(mesh.triangle_count(), 16 * 60 * 2);
        assert_well_formed(&mesh);
    }

    #[test]
    fn torus_stays_within_outer_radius() {
        let mesh = torus(1.0, 0.4, 8, 24);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            assert!(p.truncate().length() <= 1.4 + 1e-5);
            assert!(p.z.abs() <= 0.4 + 1e-5);
        }
    }

    #[test]
    fn cone_counts() {
        let mesh = SectionShape::Cone.mesh();
        // two side rows plus cap centers and rim
        assert_eq!(mesh.vertices.len(), 33 * 2 + 32 + 33);
        assert_eq!(mesh.triangle_count(), 32 * 2);
        assert_well_formed(&mesh);
    }

    #[test]
    fn cone_apex_and_base() {
        let mesh = cone(1.0, 2.0, 16);
        let ys: Vec<f32> = mesh.vertices.iter().map(|v| v.position[1]).collect();
        let top = ys.iter().copied().fold(f32::MIN, f32::max);
        let bottom = ys.iter().copied().fold(f32::MAX, f32::min);
        assert_eq!(top, 1.0);
        assert_eq!(bottom, -1.0);
    }

    #[test]
    fn torus_knot_counts() {
        let mesh = SectionShape::TorusKnot.mesh();
        assert_eq!(mesh.vertices.len(), 101 * 17);
        assert_eq!(mesh.triangle_count(), 100 * 16 * 2);
        assert_well_formed(&mesh);
    }

    #[test]
    fn torus_knot_closes_on_itself() {
        let mesh = torus_knot(0.8, 0.35, 64, 8, 2, 3);
        let first = Vec3::from_array(mesh.vertices[0].position);
        let last_ring = 64 * 9;
        let last = Vec3::from_array(mesh.vertices[last_ring].position);
        assert!((first - last).length() < 1e-3);
    }
}
