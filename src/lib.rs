//! Procedural 2D noise-map generation library
//!
//! Synthesizes intensity fields from uniform-random or seeded-growth noise,
//! smooths them with an iterative box-averaging filter, and classifies the
//! result into terrain color bands or text glyphs.

pub mod ascii;
pub mod bands;
pub mod export;
pub mod filter;
pub mod generate;
pub mod grid;
pub mod growth;
