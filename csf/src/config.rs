use serde::{Deserialize, Serialize};

use cumulus::geometry::primitives::Point;
use cumulus::util::LayoutConfig;

use crate::io::svg_util::SvgDrawOptions;
use crate::samplers::SizeSamplerConfig;

/// Configuration for the CSF reference implementation
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct CsfConfig {
    /// Configuration of the cloud layout engine
    pub layout_config: LayoutConfig,
    /// Anchor point the cloud grows around
    pub anchor: Point,
    /// Number of rectangles to place
    pub n_rects: usize,
    /// Policy generating the rectangle sizes
    pub size_sampler: SizeSamplerConfig,
    /// Seed for the PRNG. If undefined, sizes are sampled in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for CsfConfig {
    fn default() -> Self {
        Self {
            layout_config: LayoutConfig::default(),
            anchor: Point(0, 0),
            n_rects: 400,
            size_sampler: SizeSamplerConfig::Uniform {
                width: (20, 60),
                height: (15, 40),
            },
            prng_seed: Some(0),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
