//! Smoothing filters for intensity grids.
//!
//! The box-averaging filter is the shared smoothing stage for every noise
//! family; the glow filter adds distance-falloff brightness around
//! maximum-intensity sources.

use rayon::prelude::*;

use crate::grid::{Grid, NEIGHBOR_OFFSETS_8};

/// Number of passes between progress callbacks in [`apply_n`].
const PROGRESS_INTERVAL: usize = 16;

/// One pass of neighborhood averaging.
///
/// Each output cell is the mean of the cell itself and its in-bounds
/// 8-neighbors. Cells outside the grid are excluded from both the sum and
/// the divisor, so corners average over 4 values, edges over 6, and interior
/// cells over 9. The mean truncates toward zero (u32 accumulation, integer
/// division).
///
/// The input grid stays frozen for the whole pass; rows of the output are
/// computed in parallel.
pub fn apply(grid: &Grid<u8>) -> Grid<u8> {
    let width = grid.width;
    let data: Vec<u8> = (0..grid.height)
        .into_par_iter()
        .flat_map_iter(|y| {
            (0..width).map(move |x| {
                let mut sum = *grid.get(x, y) as u32;
                let mut count = 1u32;
                for &(dx, dy) in NEIGHBOR_OFFSETS_8.iter() {
                    if let Some(&v) = grid.try_get(x as i64 + dx, y as i64 + dy) {
                        sum += v as u32;
                        count += 1;
                    }
                }
                (sum / count) as u8
            })
        })
        .collect();

    Grid::from_raw(width, grid.height, data)
}

/// Apply the averaging filter `repetitions` times in sequence.
///
/// Each pass fully materializes before the next begins. `repetitions == 0`
/// is treated as 1: the filter always runs at least one effective pass.
/// The optional callback receives `(completed, total)` every 16 passes.
pub fn apply_n(
    grid: &Grid<u8>,
    repetitions: usize,
    progress: Option<&dyn Fn(usize, usize)>,
) -> Grid<u8> {
    let total = repetitions.max(1);
    let mut current = apply(grid);
    for done in 2..=total {
        current = apply(&current);
        if done % PROGRESS_INTERVAL == 0 {
            if let Some(report) = progress {
                report(done, total);
            }
        }
    }
    current
}

/// Brighten every cell by the summed inverse-square falloff from all
/// maximum-intensity sources.
///
/// Each non-source cell gains `255 * brightness / (d * d)` (truncated) per
/// source, where `d` is the euclidean distance plus one; the result
/// saturates at 255. Sources themselves are left untouched.
pub fn glow(grid: &mut Grid<u8>, brightness: f64) {
    let mut sources: Vec<(usize, usize)> = Vec::new();
    for (x, y, &v) in grid.iter() {
        if v == u8::MAX {
            sources.push((x, y));
        }
    }

    for y in 0..grid.height {
        for x in 0..grid.width {
            if *grid.get(x, y) == u8::MAX {
                continue;
            }
            let mut value = *grid.get(x, y) as u32;
            for &(sx, sy) in &sources {
                let dx = x as f64 - sx as f64;
                let dy = y as f64 - sy as f64;
                let distance = (dx * dx + dy * dy).sqrt() + 1.0;
                value += (255.0 * brightness / (distance * distance)) as u32;
                value = value.min(u8::MAX as u32);
            }
            grid.set(x, y, value as u8);
        }
    }
}
