use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Background particle field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Particles", inline)]
#[serde(default)]
pub struct ParticleOptions {
    /// Number of particles.
    #[schemars(title = "Count", range(min = 0, max = 5000))]
    pub count: u32,
    /// World-space edge length of each particle quad.
    #[schemars(title = "Size", range(min = 0.005, max = 0.2), extend("step" = 0.005))]
    pub size: f32,
    /// Width and depth of the box the particles are scattered in.
    #[schemars(title = "Spread", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub spread: f32,
    /// RNG seed, so a preset always produces the same field.
    #[schemars(skip)]
    pub seed: u64,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            count: 200,
            size: 0.03,
            spread: 10.0,
            seed: 7,
        }
    }
}
