use glam::Vec3;
use wgpu::util::DeviceExt;

use super::pipeline_helpers;
use super::render_context::RenderContext;
use super::texture::GradientTexture;
use crate::options::{LightingOptions, MaterialOptions};
use crate::util::color;

/// Directional light parameters.
/// NOTE: Must match the WGSL `LightingUniform` layout exactly (32 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Direction the light shines from (normalized).
    pub direction: [f32; 3],
    /// Directional intensity.
    pub intensity: f32,
    /// Linear light color.
    pub color: [f32; 3],
    /// Flat ambient term.
    pub ambient: f32,
}

impl LightingUniform {
    /// Uniform for the given options. A zero direction falls back to +Y.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        let direction = Vec3::from_array(options.direction)
            .try_normalize()
            .unwrap_or(Vec3::Y);
        let rgb = color::parse_hex(&options.color).unwrap_or_else(|| {
            log::warn!("invalid light color {:?}", options.color);
            [1.0; 3]
        });
        Self {
            direction: direction.to_array(),
            intensity: options.intensity,
            color: color::srgb_to_linear(rgb),
            ambient: options.ambient,
        }
    }
}

/// Light uniform plus the toon gradient map, bound together as group 1 of
/// the toon pipeline.
pub struct Lighting {
    /// CPU copy of the uniform.
    pub uniform: LightingUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Toon ramp texture and its nearest sampler.
    pub gradient: GradientTexture,
    /// Layout: uniform, gradient texture, gradient sampler.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over the buffer and the current gradient.
    pub bind_group: wgpu::BindGroup,
}

impl Lighting {
    /// Lighting and gradient map for the given options.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        lighting: &LightingOptions,
        material: &MaterialOptions,
    ) -> Self {
        let uniform = LightingUniform::from_options(lighting);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Lighting Bind Group Layout"),
                entries: &[
                    pipeline_helpers::uniform_buffer(
                        0,
                        wgpu::ShaderStages::FRAGMENT,
                    ),
                    pipeline_helpers::texture_2d(1),
                    pipeline_helpers::filtering_sampler(2),
                ],
            },
        );

        let gradient = GradientTexture::new(
            &context.device,
            &context.queue,
            material.gradient_tones,
        );
        let bind_group =
            Self::create_bind_group(&context.device, &layout, &buffer, &gradient);

        Self {
            uniform,
            buffer,
            gradient,
            layout,
            bind_group,
        }
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &wgpu::Buffer,
        gradient: &GradientTexture,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Lighting Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(
                        &gradient.view,
                    ),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&gradient.sampler),
                },
            ],
        })
    }

    /// Upload new light parameters; rebuild the gradient map only when the
    /// band count changed.
    pub fn apply_options(
        &mut self,
        context: &RenderContext,
        lighting: &LightingOptions,
        material: &MaterialOptions,
    ) {
        self.uniform = LightingUniform::from_options(lighting);
        context.queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );

        if material.gradient_tones != self.gradient.tones {
            self.gradient = GradientTexture::new(
                &context.device,
                &context.queue,
                material.gradient_tones,
            );
            self.bind_group = Self::create_bind_group(
                &context.device,
                &self.layout,
                &self.buffer,
                &self.gradient,
            );
        }
    }
}
