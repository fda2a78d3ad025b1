//! Noise map generation.
//!
//! Dispatches on the requested noise family, fills a raw grid from the
//! caller's RNG, and runs the shared smoothing pipeline.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::filter;
use crate::grid::{Grid, Point};
use crate::growth;

/// Smoothing passes applied to a uniform-random field.
const UNIFORM_BLUR_PASSES: usize = 64;

/// The supported noise families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoiseFamily {
    /// Independent uniform draws per cell, heavily smoothed.
    Uniform,
    /// Sparse maximum-intensity seeds grown outward, then smoothed.
    Growth,
    /// Gradient/coherent noise. Reserved; requesting it is an error.
    Coherent,
}

impl NoiseFamily {
    pub fn name(&self) -> &'static str {
        match self {
            NoiseFamily::Uniform => "uniform",
            NoiseFamily::Growth => "growth",
            NoiseFamily::Coherent => "coherent",
        }
    }
}

impl FromStr for NoiseFamily {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, NoiseError> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" => Ok(NoiseFamily::Uniform),
            "growth" => Ok(NoiseFamily::Growth),
            "coherent" => Ok(NoiseFamily::Coherent),
            _ => Err(NoiseError::InvalidFamily(s.to_string())),
        }
    }
}

/// Knobs for the growth family. Ignored by the uniform family.
#[derive(Clone, Debug)]
pub struct NoiseParams {
    /// Chance for each cell to become a growth origin, in percent.
    /// Fractional values are meaningful down to 0.001.
    pub density_percent: f64,
    /// Growth rounds to run before smoothing.
    pub spread_distance: usize,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            density_percent: 2.0,
            spread_distance: 2,
        }
    }
}

/// Errors from noise generation.
#[derive(Debug, PartialEq, Eq)]
pub enum NoiseError {
    /// Width or height was zero.
    InvalidDimensions { width: usize, height: usize },
    /// A family selector string did not name a known family.
    InvalidFamily(String),
    /// The requested family has no implementation yet.
    Unimplemented(NoiseFamily),
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseError::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
            NoiseError::InvalidFamily(s) => write!(f, "unknown noise family '{}'", s),
            NoiseError::Unimplemented(family) => {
                write!(f, "noise family '{}' is not implemented", family.name())
            }
        }
    }
}

impl std::error::Error for NoiseError {}

/// Generate a `width x height` noise map of the given family.
///
/// All randomness comes from the caller's RNG handle, so a seeded generator
/// yields byte-identical output for identical parameters. The optional
/// progress callback receives `(completed, total)` smoothing-pass counts.
pub fn generate<R: Rng>(
    width: usize,
    height: usize,
    family: NoiseFamily,
    params: &NoiseParams,
    rng: &mut R,
    progress: Option<&dyn Fn(usize, usize)>,
) -> Result<Grid<u8>, NoiseError> {
    if width == 0 || height == 0 {
        return Err(NoiseError::InvalidDimensions { width, height });
    }

    match family {
        NoiseFamily::Uniform => {
            let raw: Vec<u8> = (0..width * height)
                .map(|_| rng.gen_range(0..=u8::MAX))
                .collect();
            let grid = Grid::from_raw(width, height, raw);
            Ok(filter::apply_n(&grid, UNIFORM_BLUR_PASSES, progress))
        }

        NoiseFamily::Growth => {
            let mut grid: Grid<u8> = Grid::new(width, height);
            let mut origins: Vec<Point> = Vec::new();
            for y in 0..height {
                for x in 0..width {
                    // Fine-grained percent draw so densities below 1% stay
                    // meaningful: a draw over [1, 100000] scaled to [0, 100].
                    let draw = rng.gen_range(1..=100_000u32) as f64 / 1000.0;
                    if draw <= params.density_percent {
                        grid.set(x, y, u8::MAX);
                        origins.push((x, y));
                    }
                }
            }

            growth::grow(&mut grid, origins, params.spread_distance);

            Ok(filter::apply_n(&grid, growth_blur_passes(width, height), progress))
        }

        NoiseFamily::Coherent => Err(NoiseError::Unimplemented(family)),
    }
}

/// Smoothing passes for the growth family, scaled to grid area:
/// `floor((log2(area) - 2)^2)`. Larger grids get more passes so blob edges
/// stay soft at any resolution.
fn growth_blur_passes(width: usize, height: usize) -> usize {
    let area = (width * height) as f64;
    let x = area.log2() - 2.0;
    (x * x) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_family_from_str() {
        assert_eq!("uniform".parse::<NoiseFamily>(), Ok(NoiseFamily::Uniform));
        assert_eq!("Growth".parse::<NoiseFamily>(), Ok(NoiseFamily::Growth));
        assert_eq!("COHERENT".parse::<NoiseFamily>(), Ok(NoiseFamily::Coherent));
        assert_eq!(
            "plasma".parse::<NoiseFamily>(),
            Err(NoiseError::InvalidFamily("plasma".to_string()))
        );
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = generate(0, 8, NoiseFamily::Uniform, &NoiseParams::default(), &mut rng, None);
        assert_eq!(result, Err(NoiseError::InvalidDimensions { width: 0, height: 8 }));
    }

    #[test]
    fn test_coherent_is_unimplemented() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = generate(8, 8, NoiseFamily::Coherent, &NoiseParams::default(), &mut rng, None);
        assert_eq!(result, Err(NoiseError::Unimplemented(NoiseFamily::Coherent)));
    }

    #[test]
    fn test_uniform_is_deterministic_per_seed() {
        let params = NoiseParams::default();
        let mut a = ChaCha8Rng::seed_from_u64(0xC0FFEE);
        let mut b = ChaCha8Rng::seed_from_u64(0xC0FFEE);
        let first = generate(8, 8, NoiseFamily::Uniform, &params, &mut a, None).unwrap();
        let second = generate(8, 8, NoiseFamily::Uniform, &params, &mut b, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_growth_is_deterministic_per_seed() {
        let params = NoiseParams {
            density_percent: 5.0,
            spread_distance: 2,
        };
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        let first = generate(16, 16, NoiseFamily::Growth, &params, &mut a, None).unwrap();
        let second = generate(16, 16, NoiseFamily::Growth, &params, &mut b, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_growth_full_density_single_cell() {
        // Every draw lands at or below 100%, so the lone cell becomes an
        // origin; smoothing a 1x1 grid divides by 1 and changes nothing.
        let params = NoiseParams {
            density_percent: 100.0,
            spread_distance: 1,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let grid = generate(1, 1, NoiseFamily::Growth, &params, &mut rng, None).unwrap();
        assert_eq!(*grid.get(0, 0), 255);
    }

    #[test]
    fn test_growth_zero_density_stays_dark() {
        let params = NoiseParams {
            density_percent: 0.0,
            spread_distance: 3,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let grid = generate(8, 8, NoiseFamily::Growth, &params, &mut rng, None).unwrap();
        assert!(grid.iter().all(|(_, _, &v)| v == 0));
    }

    #[test]
    fn test_growth_blur_passes_scales_with_area() {
        // 256x256: (log2(65536) - 2)^2 = 14^2
        assert_eq!(growth_blur_passes(256, 256), 196);
        // 16x16: (8 - 2)^2
        assert_eq!(growth_blur_passes(16, 16), 36);
        // 1x1: (0 - 2)^2
        assert_eq!(growth_blur_passes(1, 1), 4);
    }

    #[test]
    fn test_generate_preserves_dimensions() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let grid =
            generate(12, 7, NoiseFamily::Uniform, &NoiseParams::default(), &mut rng, None).unwrap();
        assert_eq!(grid.width, 12);
        assert_eq!(grid.height, 7);
    }
}
