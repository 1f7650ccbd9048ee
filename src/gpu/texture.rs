//! Depth target and toon gradient textures.

use super::pipeline_helpers::{self, DEPTH_FORMAT};

/// A depth attachment sized to the surface.
pub struct DepthTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl DepthTexture {
    /// Create a depth texture with the given dimensions.
    #[must_use]
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// Brightness steps of a toon ramp with `tones` bands, darkest first.
///
/// Three tones give `[0, 127, 255]`; fewer than two tones collapse to a
/// single fully-lit band.
#[must_use]
pub fn gradient_ramp(tones: u32) -> Vec<u8> {
    if tones < 2 {
        return vec![255];
    }
    let last = (tones - 1) as f32;
    (0..tones)
        .map(|i| (i as f32 / last * 255.0) as u8)
        .collect()
}

/// An N×1 gradient map sampled with nearest filtering, so lighting falls
/// into hard bands instead of a smooth falloff.
pub struct GradientTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
    /// Nearest-filtering sampler.
    pub sampler: wgpu::Sampler,
    /// Number of bands.
    pub tones: u32,
}

impl GradientTexture {
    /// Upload a ramp with `tones` bands.
    #[must_use]
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, tones: u32) -> Self {
        let ramp = gradient_ramp(tones);
        let width = ramp.len() as u32;
        let texels: Vec<u8> =
            ramp.iter().flat_map(|&v| [v, v, v, 255]).collect();

        let size = wgpu::Extent3d {
            width,
            height: 1,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Gradient Map"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &texels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(1),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler =
            pipeline_helpers::nearest_sampler(device, "Gradient Sampler");
        Self {
            texture,
            view,
            sampler,
            tones,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_tone_ramp() {
        assert_eq!(gradient_ramp(3), vec![0, 127, 255]);
    }

    #[test]
    fn five_tone_ramp_is_evenly_spaced() {
        assert_eq!(gradient_ramp(5), vec![0, 63, 127, 191, 255]);
    }

    #[test]
    fn degenerate_ramp_is_fully_lit() {
        assert_eq!(gradient_ramp(0), vec![255]);
        assert_eq!(gradient_ramp(1), vec![255]);
    }
}
