use anyhow::{Context, Result, ensure};
use cumulus::geometry::primitives::Size;
use rand::Rng;
use rand_distr::{Distribution, Zipf};
use serde::{Deserialize, Serialize};

/// Policy generating the sequence of rectangle sizes fed to the layouter.
/// The layout engine makes no assumption about this sequence beyond every
/// size being positive.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub enum SizeSamplerConfig {
    /// Every rectangle gets the same size
    Fixed { width: i32, height: i32 },
    /// Width and height drawn uniformly from the given (min, max) bounds
    Uniform {
        width: (i32, i32),
        height: (i32, i32),
    },
    /// Tag-frequency shaped: ranks are Zipf-distributed, the most likely
    /// rank maps to `small` and the rarest to `large` — many small tags,
    /// an occasional big one
    Zipf {
        small: (i32, i32),
        large: (i32, i32),
        n_ranks: u32,
        exponent: f64,
    },
}

/// Samples rectangle sizes according to a [`SizeSamplerConfig`].
pub enum SizeSampler {
    Fixed(Size),
    Uniform {
        width: (i32, i32),
        height: (i32, i32),
    },
    Zipf {
        small: Size,
        large: Size,
        n_ranks: u32,
        distr: Zipf<f64>,
    },
}

impl SizeSampler {
    pub fn from_config(config: SizeSamplerConfig) -> Result<Self> {
        match config {
            SizeSamplerConfig::Fixed { width, height } => {
                let size = Size::new(width, height);
                ensure!(size.is_valid(), "fixed size {size} is not positive");
                Ok(SizeSampler::Fixed(size))
            }
            SizeSamplerConfig::Uniform { width, height } => {
                ensure!(
                    0 < width.0 && width.0 <= width.1 && 0 < height.0 && height.0 <= height.1,
                    "uniform size bounds must be positive and ordered: w: {width:?}, h: {height:?}"
                );
                Ok(SizeSampler::Uniform { width, height })
            }
            SizeSamplerConfig::Zipf {
                small,
                large,
                n_ranks,
                exponent,
            } => {
                let (small, large) = (Size::from(small), Size::from(large));
                ensure!(
                    small.is_valid() && large.is_valid(),
                    "zipf sizes must be positive: small: {small}, large: {large}"
                );
                ensure!(n_ranks >= 2, "zipf sampler needs at least two ranks");
                let distr =
                    Zipf::new(n_ranks as f64, exponent).context("invalid zipf parameters")?;
                Ok(SizeSampler::Zipf {
                    small,
                    large,
                    n_ranks,
                    distr,
                })
            }
        }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> Size {
        match self {
            SizeSampler::Fixed(size) => *size,
            SizeSampler::Uniform { width, height } => Size::new(
                rng.random_range(width.0..=width.1),
                rng.random_range(height.0..=height.1),
            ),
            SizeSampler::Zipf {
                small,
                large,
                n_ranks,
                distr,
            } => {
                //rank 1 is drawn most often and maps to the small size
                let rank = distr.sample(rng);
                let t = (rank - 1.0) / (*n_ranks as f64 - 1.0);
                let lerp = |a: i32, b: i32| a + ((b - a) as f64 * t).round() as i32;
                Size::new(
                    lerp(small.width, large.width),
                    lerp(small.height, large.height),
                )
            }
        }
    }
}
