//! Everything that touches the GPU each frame.
//!
//! [`SceneRenderer`] owns the render context and the two passes (toon
//! meshes, then particles) and turns a [`FrameSnapshot`] into a presented
//! frame.

/// Instanced particle quads.
pub mod particles;
/// Toon-shaded section meshes.
pub mod toon;

use self::particles::{ParticleRenderer, ParticleUniform};
use self::toon::ToonRenderer;
use crate::camera::controller::CameraController;
use crate::error::ScrollscapeError;
use crate::frame::FrameSnapshot;
use crate::gpu::lighting::Lighting;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::DepthTexture;
use crate::options::Options;
use crate::scene::SceneLayout;
use crate::util::color;

/// Owns the GPU context and draws the scene.
pub struct SceneRenderer {
    context: RenderContext,
    camera: CameraController,
    lighting: Lighting,
    toon: ToonRenderer,
    particles: ParticleRenderer,
    depth: DepthTexture,
    clear_color: wgpu::Color,
    material_color: [f32; 4],
}

fn clear_color(options: &Options) -> wgpu::Color {
    color::hex_to_wgpu(&options.display.background).unwrap_or_else(|| {
        log::warn!("invalid background color {:?}", options.display.background);
        wgpu::Color::BLACK
    })
}

fn particle_uniform(options: &Options) -> ParticleUniform {
    ParticleUniform::new(options.material.linear_rgba(), options.particles.size)
}

impl SceneRenderer {
    /// Build every pipeline and upload `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::Shader`] if a shader fails to compose.
    pub fn new(
        context: RenderContext,
        options: &Options,
        layout: &SceneLayout,
    ) -> Result<Self, ScrollscapeError> {
        let mut composer = ShaderComposer::new()?;
        let camera = CameraController::new(&context, &options.camera);
        let lighting =
            Lighting::new(&context, &options.lighting, &options.material);
        let toon = ToonRenderer::new(
            &context,
            &mut composer,
            &camera.layout,
            &lighting.layout,
            &layout.meshes,
        )?;
        let particles = ParticleRenderer::new(
            &context,
            &mut composer,
            &camera.layout,
            particle_uniform(options),
            &layout.particles,
        )?;
        let (width, height) = context.size();
        let depth = DepthTexture::new(&context.device, width, height);
        log::info!(
            "renderer ready: {}x{} {:?}, {} meshes, {} particles",
            width,
            height,
            context.render_format(),
            layout.meshes.len(),
            particles.count()
        );

        Ok(Self {
            context,
            camera,
            lighting,
            toon,
            particles,
            depth,
            clear_color: clear_color(options),
            material_color: options.material.linear_rgba(),
        })
    }

    /// The underlying GPU context.
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Draw one frame and present it.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired.
    pub fn render(
        &mut self,
        snapshot: &FrameSnapshot,
    ) -> Result<(), wgpu::SurfaceError> {
        self.camera.follow(snapshot);
        self.camera.update_gpu(&self.context.queue);
        self.toon
            .update(&self.context.queue, snapshot, self.material_color);

        let frame = self.context.get_next_frame()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.context.render_format()),
            ..Default::default()
        });

        let mut encoder = self.context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("scene render pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(self.clear_color),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Discard,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
            self.toon.draw(
                &mut pass,
                &self.camera.bind_group,
                &self.lighting.bind_group,
            );
            self.particles.draw(&mut pass, &self.camera.bind_group);
        }
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }

    /// Resize the surface, depth buffer and projection. Ignores zero sizes.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.depth = DepthTexture::new(&self.context.device, width, height);
        self.camera.resize(width, height);
    }

    /// Reconfigure the surface at its current size after it was lost or
    /// went out of date.
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    /// Apply cosmetic options: camera projection, light, colors, sizes.
    pub fn apply_options(&mut self, options: &Options) {
        self.camera.rig.apply_options(&options.camera);
        self.lighting.apply_options(
            &self.context,
            &options.lighting,
            &options.material,
        );
        self.clear_color = clear_color(options);
        self.material_color = options.material.linear_rgba();
        self.particles
            .set_uniform(&self.context.queue, particle_uniform(options));
    }

    /// Move meshes and replace the particle field.
    pub fn apply_layout(&mut self, layout: &SceneLayout) {
        self.toon.set_positions(&layout.meshes);
        self.particles
            .set_positions(&self.context.device, &layout.particles);
    }
}
