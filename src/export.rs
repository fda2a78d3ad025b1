//! PNG export of noise maps.
//!
//! Two pixel formats: single-channel intensity for raw noise, and RGB for
//! band-classified terrain.

use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};

use crate::bands::Rgb8;
use crate::grid::Grid;

/// Export an intensity grid as a grayscale PNG.
pub fn export_intensity(grid: &Grid<u8>, path: &str) -> Result<(), image::ImageError> {
    let mut img: GrayImage = ImageBuffer::new(grid.width as u32, grid.height as u32);

    for (x, y, &v) in grid.iter() {
        img.put_pixel(x as u32, y as u32, Luma([v]));
    }

    img.save(path)
}

/// Export a classified color grid as an RGB PNG.
pub fn export_terrain(grid: &Grid<Rgb8>, path: &str) -> Result<(), image::ImageError> {
    let mut img: RgbImage = ImageBuffer::new(grid.width as u32, grid.height as u32);

    for (x, y, &color) in grid.iter() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }

    img.save(path)
}
