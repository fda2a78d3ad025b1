//! Frontier-based growth spreading.
//!
//! Seed cells at maximum intensity expand outward one ring of 4-connected
//! neighbors per round, producing the solid cores that the averaging filter
//! later softens into blobs.

use crate::grid::{Grid, Point, NEIGHBOR_OFFSETS_4};

/// Expand the seeded `origins` outward for `rounds` rounds.
///
/// Each round snapshots the current frontier, writes 255 into every
/// in-bounds 4-connected neighbor of every frontier point, and rebuilds the
/// frontier from that round's writes alone. The frontier never accumulates
/// across rounds, so each round touches only the expanding perimeter rather
/// than the whole grown area. The frontier may contain duplicates; writing
/// 255 to an already-255 cell is idempotent.
///
/// With `rounds == 0` the grid is returned exactly as seeded. After `r`
/// rounds every cell within Manhattan distance `r` of an origin is 255.
pub fn grow(grid: &mut Grid<u8>, origins: Vec<Point>, rounds: usize) {
    let mut frontier = origins;

    for _ in 0..rounds {
        let mut next = Vec::new();
        for &(x, y) in &frontier {
            for &(dx, dy) in NEIGHBOR_OFFSETS_4.iter() {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if grid.try_get(nx, ny).is_some() {
                    grid.set(nx as usize, ny as usize, u8::MAX);
                    next.push((nx as usize, ny as usize));
                }
            }
        }
        frontier = next;
    }
}
