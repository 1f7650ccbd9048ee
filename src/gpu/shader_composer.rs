use std::borrow::Cow;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor,
    ShaderLanguage, ShaderType,
};

use crate::error::ScrollscapeError;

/// A shader entry point the renderers compose at startup.
#[derive(Debug, Clone, Copy)]
pub struct ShaderSource {
    /// WGSL source, possibly with `#import` directives.
    pub source: &'static str,
    /// Path used in composer diagnostics.
    pub file_path: &'static str,
}

/// Toon-shaded section meshes.
pub const TOON_SHADER: ShaderSource = ShaderSource {
    source: include_str!("../../assets/shaders/toon.wgsl"),
    file_path: "toon.wgsl",
};

/// Camera-facing particle quads.
pub const PARTICLE_SHADER: ShaderSource = ShaderSource {
    source: include_str!("../../assets/shaders/particles.wgsl"),
    file_path: "particles.wgsl",
};

/// Shared modules, registered in dependency order.
const MODULES: &[ShaderSource] = &[
    ShaderSource {
        source: include_str!("../../assets/shaders/modules/camera.wgsl"),
        file_path: "modules/camera.wgsl",
    },
    ShaderSource {
        source: include_str!("../../assets/shaders/modules/lighting.wgsl"),
        file_path: "modules/lighting.wgsl",
    },
];

/// Wraps `naga_oil::compose::Composer` to provide shader composition with
/// `#import` support.
///
/// Consuming shaders use `#import scrollscape::module_name` to pull in shared
/// code. The composer produces `naga::Module` IR directly, skipping WGSL
/// re-parse at runtime.
pub struct ShaderComposer {
    composer: Composer,
}

impl ShaderComposer {
    /// Composer with every shared module registered.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::Shader`] if a shared module fails to parse.
    pub fn new() -> Result<Self, ScrollscapeError> {
        let mut composer = Composer::default();
        for module in MODULES {
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: module.source,
                    file_path: module.file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| {
                    ScrollscapeError::Shader(format!(
                        "failed to register '{}': {e}",
                        module.file_path
                    ))
                })?;
        }
        Ok(Self { composer })
    }

    /// Compose a shader into a `wgpu::ShaderModule` ready for pipeline
    /// creation.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::Shader`] if composition fails.
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        shader: ShaderSource,
    ) -> Result<wgpu::ShaderModule, ScrollscapeError> {
        let module = self.compose_naga(shader)?;
        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(module)),
        }))
    }

    /// Compose into a `naga::Module` without a GPU device.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::Shader`] if composition fails.
    pub fn compose_naga(
        &mut self,
        shader: ShaderSource,
    ) -> Result<naga::Module, ScrollscapeError> {
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source: shader.source,
                file_path: shader.file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(|e| {
                ScrollscapeError::Shader(format!(
                    "failed to compose '{}': {e}",
                    shader.file_path
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_points(module: &naga::Module) -> Vec<&str> {
        module.entry_points.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn toon_shader_composes() {
        let mut composer = ShaderComposer::new().unwrap();
        let module = composer.compose_naga(TOON_SHADER).unwrap();
        assert_eq!(entry_points(&module), vec!["vs_main", "fs_main"]);
    }

    #[test]
    fn particle_shader_composes() {
        let mut composer = ShaderComposer::new().unwrap();
        let module = composer.compose_naga(PARTICLE_SHADER).unwrap();
        assert_eq!(entry_points(&module), vec!["vs_main", "fs_main"]);
    }

    #[test]
    fn unknown_import_is_an_error() {
        let mut composer = ShaderComposer::new().unwrap();
        let broken = ShaderSource {
            source: "#import scrollscape::missing::shade\n\
                     @fragment fn fs_main() -> @location(0) vec4<f32> {\n\
                     return shade();\n\
                     }\n",
            file_path: "broken.wgsl",
        };
        let err = composer.compose_naga(broken).unwrap_err();
        assert!(err.to_string().contains("broken.wgsl"));
    }
}
