use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::error::ScrollscapeError;
use crate::gpu::pipeline_helpers::{self, PipelineDesc};
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::{ShaderComposer, PARTICLE_SHADER};

/// Shared particle color and size.
/// NOTE: Must match the WGSL `ParticleUniform` layout (32 bytes, padded).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleUniform {
    /// Linear RGBA color.
    pub color: [f32; 4],
    /// World-space quad edge length.
    pub size: f32,
    /// Uniform buffer alignment padding.
    pub _pad: [f32; 3],
}

impl ParticleUniform {
    /// Uniform for the given color and size.
    #[must_use]
    pub fn new(color: [f32; 4], size: f32) -> Self {
        Self {
            color,
            size,
            _pad: [0.0; 3],
        }
    }
}

fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    }
}

/// Draws the particle field as instanced camera-facing quads.
pub struct ParticleRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_buffer: Option<wgpu::Buffer>,
    count: u32,
}

impl ParticleRenderer {
    /// Build the particle pipeline and upload `positions`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::Shader`] if the shader fails to compose.
    pub fn new(
        context: &RenderContext,
        composer: &mut ShaderComposer,
        camera_layout: &wgpu::BindGroupLayout,
        uniform: ParticleUniform,
        positions: &[Vec3],
    ) -> Result<Self, ScrollscapeError> {
        let device = &context.device;
        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Particle Bind Group Layout"),
                entries: &[pipeline_helpers::uniform_buffer(
                    0,
                    wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                )],
            });
        let uniform_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Particle Uniform"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Particle Bind Group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let shader =
            composer.compose(device, "Particle Shader", PARTICLE_SHADER)?;
        let pipeline = pipeline_helpers::create_scene_pipeline(
            device,
            &PipelineDesc {
                label: "Particle",
                shader: &shader,
                format: context.render_format(),
                blend: None,
                buffers: &[instance_layout()],
                bind_group_layouts: &[camera_layout, &layout],
                depth_write: true,
            },
        );

        let mut renderer = Self {
            pipeline,
            uniform_buffer,
            bind_group,
            instance_buffer: None,
            count: 0,
        };
        renderer.set_positions(device, positions);
        Ok(renderer)
    }

    /// Number of particles drawn.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Replace the particle field.
    pub fn set_positions(&mut self, device: &wgpu::Device, positions: &[Vec3]) {
        self.count = positions.len() as u32;
        self.instance_buffer = (!positions.is_empty()).then(|| {
            let centers: Vec<[f32; 3]> =
                positions.iter().map(|p| p.to_array()).collect();
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Particle Instances"),
                contents: bytemuck::cast_slice(&centers),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });
    }

    /// Upload a new color and size.
    pub fn set_uniform(&self, queue: &wgpu::Queue, uniform: ParticleUniform) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[uniform]),
        );
    }

    /// Record the instanced draw. Expects the camera at group 0.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, camera: &wgpu::BindGroup) {
        let Some(instances) = &self.instance_buffer else {
            return;
        };
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera, &[]);
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, instances.slice(..));
        pass.draw(0..6, 0..self.count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_padded_to_32_bytes() {
        assert_eq!(size_of::<ParticleUniform>(), 32);
    }
}
