use wgpu::util::DeviceExt;

use super::core::CameraUniform;
use super::rig::CameraRig;
use crate::frame::FrameSnapshot;
use crate::gpu::pipeline_helpers;
use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// Owns the camera rig and its GPU uniform, layout and bind group.
pub struct CameraController {
    /// Rig-mounted camera.
    pub rig: CameraRig,
    /// CPU copy of the uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Layout shared by every pipeline that reads the camera (group 0).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over [`buffer`](Self::buffer).
    pub bind_group: wgpu::BindGroup,
}

impl CameraController {
    /// Camera at the rig origin, sized to the context's surface.
    #[must_use]
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let aspect =
            context.config.width as f32 / context.config.height.max(1) as f32;
        let rig = CameraRig::new(options, aspect);

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&rig.camera);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[pipeline_helpers::uniform_buffer(
                    0,
                    wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                )],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Camera Bind Group"),
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                });

        Self {
            rig,
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Place the camera for this frame.
    pub fn follow(&mut self, snapshot: &FrameSnapshot) {
        self.rig.follow(snapshot);
    }

    /// Upload the current camera to the GPU.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(&self.rig.camera);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }

    /// Update the aspect ratio for a new surface size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.rig.resize(width, height);
    }
}
