use serde::{Deserialize, Serialize};

///Configuration of the cloud layout engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    ///Configuration of the spiral along which candidate positions are probed
    pub spiral: SpiralConfig,
    ///Maximum number of spiral points probed for a single rectangle before giving up
    pub max_probes_per_rect: usize,
}

///Configuration of the outward spiral followed by the candidate generator
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SpiralConfig {
    ///Growth of the spiral radius per radian of angle
    pub expansion_rate: f64,
    ///Lower clamp for the adaptive angular step, in radians
    pub min_angle_step: f64,
    ///Upper clamp for the adaptive angular step, in radians
    pub max_angle_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spiral: SpiralConfig::default(),
            max_probes_per_rect: 1_000_000,
        }
    }
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            expansion_rate: 1.0,
            min_angle_step: 0.001,
            max_angle_step: 0.5,
        }
    }
}
