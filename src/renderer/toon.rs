use glam::{EulerRot, Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::error::ScrollscapeError;
use crate::frame::FrameSnapshot;
use crate::gpu::pipeline_helpers::{self, PipelineDesc};
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::{ShaderComposer, TOON_SHADER};
use crate::scene::geometry::{self, SectionShape};
use crate::scene::SectionMesh;

/// Per-mesh transform and color.
/// NOTE: Must match the WGSL `MeshUniform` layout exactly (144 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniform {
    /// Object-to-world transform.
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of `model` for normals.
    pub normal_matrix: [[f32; 4]; 4],
    /// Linear RGBA base color.
    pub color: [f32; 4],
}

/// Object-to-world transform: Euler XYZ rotation, then translation.
#[must_use]
pub fn model_matrix(position: Vec3, rotation: Vec3) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

impl MeshUniform {
    /// Uniform for a mesh at `position` rotated by `rotation`.
    #[must_use]
    pub fn new(position: Vec3, rotation: Vec3, color: [f32; 4]) -> Self {
        let model = model_matrix(position, rotation);
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            color,
        }
    }
}

struct GpuMesh {
    position: Vec3,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Draws the section meshes with banded toon lighting.
pub struct ToonRenderer {
    pipeline: wgpu::RenderPipeline,
    meshes: Vec<GpuMesh>,
}

impl ToonRenderer {
    /// Upload every section mesh and build the toon pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::Shader`] if the shader fails to compose.
    pub fn new(
        context: &RenderContext,
        composer: &mut ShaderComposer,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
        sections: &[SectionMesh],
    ) -> Result<Self, ScrollscapeError> {
        let device = &context.device;
        let mesh_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Mesh Bind Group Layout"),
                entries: &[pipeline_helpers::uniform_buffer(
                    0,
                    wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                )],
            });

        let shader = composer.compose(device, "Toon Shader", TOON_SHADER)?;
        let pipeline = pipeline_helpers::create_scene_pipeline(
            device,
            &PipelineDesc {
                label: "Toon",
                shader: &shader,
                format: context.render_format(),
                blend: None,
                buffers: &[geometry::vertex_buffer_layout()],
                bind_group_layouts: &[camera_layout, lighting_layout, &mesh_layout],
                depth_write: true,
            },
        );

        let meshes = sections
            .iter()
            .map(|section| upload_mesh(device, &mesh_layout, section))
            .collect();

        Ok(Self { pipeline, meshes })
    }

    /// Move meshes to new positions. Shapes never change.
    pub fn set_positions(&mut self, sections: &[SectionMesh]) {
        for (mesh, section) in self.meshes.iter_mut().zip(sections) {
            mesh.position = section.position;
        }
    }

    /// Write this frame's transforms.
    pub fn update(
        &self,
        queue: &wgpu::Queue,
        snapshot: &FrameSnapshot,
        color: [f32; 4],
    ) {
        for (mesh, rotation) in self.meshes.iter().zip(&snapshot.mesh_rotations) {
            let uniform = MeshUniform::new(mesh.position, *rotation, color);
            queue.write_buffer(
                &mesh.uniform_buffer,
                0,
                bytemuck::cast_slice(&[uniform]),
            );
        }
    }

    /// Record draws for every mesh. Expects the camera at group 0 and the
    /// lighting at group 1.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        camera: &wgpu::BindGroup,
        lighting: &wgpu::BindGroup,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera, &[]);
        pass.set_bind_group(1, lighting, &[]);
        for mesh in &self.meshes {
            pass.set_bind_group(2, &mesh.bind_group, &[]);
            pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(
                mesh.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            pass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }
}

fn upload_mesh(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    section: &SectionMesh,
) -> GpuMesh {
    let data = section.shape.mesh();
    let label = shape_label(section.shape);

    let vertex_buffer =
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertices")),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
    let index_buffer =
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Indices")),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
    let uniform =
        MeshUniform::new(section.position, Vec3::ZERO, [1.0; 4]);
    let uniform_buffer =
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Uniform")),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(&format!("{label} Bind Group")),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    GpuMesh {
        position: section.position,
        vertex_buffer,
        index_buffer,
        index_count: data.indices.len() as u32,
        uniform_buffer,
        bind_group,
    }
}

fn shape_label(shape: SectionShape) -> &'static str {
    match shape {
        SectionShape::Torus => "Torus",
        SectionShape::Cone => "Cone",
        SectionShape::TorusKnot => "Torus Knot",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_matches_wgsl_size() {
        assert_eq!(size_of::<MeshUniform>(), 144);
    }

    #[test]
    fn model_rotates_then_translates() {
        let position = Vec3::new(2.0, -4.0, 0.0);
        let m = model_matrix(position, Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0));
        // +X rotated a quarter turn about Y lands on -Z, then moves.
        let p = m.transform_point3(Vec3::X);
        assert!((p - Vec3::new(2.0, -4.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn euler_order_is_x_then_y_then_z() {
        let r = Vec3::new(0.3, 0.5, 0.7);
        let m = model_matrix(Vec3::ZERO, r);
        let expected = Mat4::from_rotation_x(r.x)
            * Mat4::from_rotation_y(r.y)
            * Mat4::from_rotation_z(r.z);
        assert!(m.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn pure_rotation_normal_matrix_is_the_rotation() {
        let u = MeshUniform::new(Vec3::new(5.0, 1.0, 0.0), Vec3::new(0.4, 0.2, 0.0), [1.0; 4]);
        let model = Mat4::from_cols_array_2d(&u.model);
        let normal = Mat4::from_cols_array_2d(&u.normal_matrix);
        let n = Vec3::new(0.0, 1.0, 0.0);
        assert!((model.transform_vector3(n) - normal.transform_vector3(n)).length() < 1e-5);
    }
}
