//! Text rendering and export for noise maps.
//!
//! Renders an intensity grid as a block-glyph map, two columns per cell so
//! the output is roughly square in a terminal, and exports it to a text
//! file with a generated header.

use std::fs::File;
use std::io::{self, Write};

use chrono::Local;

use crate::bands::glyph_bands;
use crate::grid::Grid;

/// Render an intensity grid as a glyph map, one row per line.
pub fn render_text(grid: &Grid<u8>) -> String {
    let bands = glyph_bands();
    let mut output = String::with_capacity((grid.width * 2 + 1) * grid.height + 1);
    output.push('\n');

    for y in 0..grid.height {
        for x in 0..grid.width {
            output.push_str(bands.output_for(*grid.get(x, y)));
        }
        output.push('\n');
    }

    output
}

/// Write the glyph map to a text file with a header recording the seed,
/// dimensions, and generation time.
pub fn export_text(grid: &Grid<u8>, path: &str, seed: u64) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "=== NOISE MAP ===")?;
    writeln!(file, "Seed: {}", seed)?;
    writeln!(file, "Size: {}x{}", grid.width, grid.height)?;
    writeln!(file, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    write!(file, "{}", render_text(grid))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_picks_glyph_per_threshold() {
        let grid = Grid::from_raw(5, 1, vec![0u8, 56, 106, 156, 255]);
        let text = render_text(&grid);
        assert_eq!(
            text,
            "\n  \u{2591}\u{2591}\u{2592}\u{2592}\u{2593}\u{2593}\u{2588}\u{2588}\n"
        );
    }

    #[test]
    fn test_render_one_line_per_row() {
        let grid: Grid<u8> = Grid::new(3, 4);
        let text = render_text(&grid);
        // Leading newline plus one per row.
        assert_eq!(text.matches('\n').count(), 5);
        assert!(text.starts_with('\n'));
    }
}
