//! Threshold-band classification of intensity grids.
//!
//! A band set partitions the full [0, 255] intensity range into ordered,
//! non-overlapping sub-ranges, each mapped to a fixed output value: an RGB
//! color for terrain rendering or a glyph for text maps.

use std::fmt;

use crate::grid::Grid;

/// An RGB color triple.
pub type Rgb8 = [u8; 3];

// Reference terrain palette.
const COLOR_ABYSS: Rgb8 = [0, 15, 127];
const COLOR_SHALLOWS: Rgb8 = [0, 63, 127];
const COLOR_BEACH: Rgb8 = [255, 191, 191];
const COLOR_GRASS: Rgb8 = [31, 127, 31];
const COLOR_FOREST: Rgb8 = [15, 63, 15];

/// One intensity band: all values up to and including `upper` (and above
/// the previous band's upper, if any) map to `output`.
#[derive(Clone, Debug, PartialEq)]
pub struct Band<T> {
    pub upper: u8,
    pub output: T,
}

impl<T> Band<T> {
    pub fn up_to(upper: u8, output: T) -> Self {
        Self { upper, output }
    }
}

/// A validated, exhaustive partition of [0, 255].
///
/// Bands are stored by strictly ascending inclusive upper bound, with the
/// final bound pinned at 255. That shape makes gaps and overlaps
/// unrepresentable, so lookup never fails.
#[derive(Clone, Debug, PartialEq)]
pub struct BandSet<T> {
    bands: Vec<Band<T>>,
}

/// Errors from band-set validation.
#[derive(Debug, PartialEq, Eq)]
pub enum BandError {
    /// No bands were supplied.
    Empty,
    /// A band's upper bound does not strictly exceed its predecessor's.
    OutOfOrder { index: usize },
    /// The final band stops short of 255, leaving values unclassified.
    NotExhaustive { last_upper: u8 },
}

impl fmt::Display for BandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandError::Empty => write!(f, "band set is empty"),
            BandError::OutOfOrder { index } => {
                write!(f, "band {} is not strictly above its predecessor", index)
            }
            BandError::NotExhaustive { last_upper } => {
                write!(f, "bands end at {} and do not cover 255", last_upper)
            }
        }
    }
}

impl std::error::Error for BandError {}

impl<T: Clone> BandSet<T> {
    /// Validate and build a band set from ascending bands.
    pub fn new(bands: Vec<Band<T>>) -> Result<Self, BandError> {
        if bands.is_empty() {
            return Err(BandError::Empty);
        }
        for i in 1..bands.len() {
            if bands[i].upper <= bands[i - 1].upper {
                return Err(BandError::OutOfOrder { index: i });
            }
        }
        let last_upper = bands.last().map(|b| b.upper).unwrap_or(0);
        if last_upper != u8::MAX {
            return Err(BandError::NotExhaustive { last_upper });
        }
        Ok(Self { bands })
    }

    /// The band output for an intensity value.
    pub fn output_for(&self, value: u8) -> &T {
        for band in &self.bands {
            if value <= band.upper {
                return &band.output;
            }
        }
        // Unreachable: validation pins the last upper at 255.
        &self.bands[self.bands.len() - 1].output
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

/// Classify every cell of an intensity grid into its band output.
pub fn classify<T: Clone>(grid: &Grid<u8>, bands: &BandSet<T>) -> Grid<T> {
    let data: Vec<T> = grid.raw().iter().map(|&v| bands.output_for(v).clone()).collect();
    Grid::from_raw(grid.width, grid.height, data)
}

/// The five-band terrain palette around a sea level:
/// abyss below `sea_level - 8`, shallows up to `sea_level`, beach up to
/// `sea_level + 4`, grassland up to `sea_level + 13`, forest above.
///
/// Thresholds saturate at the ends of the intensity range; bands squeezed
/// to nothing by an extreme sea level are dropped, so the set stays valid
/// for any `sea_level`.
pub fn terrain_bands(sea_level: u8) -> BandSet<Rgb8> {
    let sea = sea_level as i32;
    let cuts: [(i32, Rgb8); 5] = [
        (sea - 9, COLOR_ABYSS),
        (sea - 1, COLOR_SHALLOWS),
        (sea + 3, COLOR_BEACH),
        (sea + 12, COLOR_GRASS),
        (255, COLOR_FOREST),
    ];

    let mut bands: Vec<Band<Rgb8>> = Vec::with_capacity(cuts.len());
    for (upper, color) in cuts {
        if upper < 0 {
            continue;
        }
        let upper = upper.min(255) as u8;
        match bands.last() {
            // A band whose clamped upper does not exceed its predecessor's
            // covers no values at this sea level.
            Some(prev) if upper <= prev.upper => continue,
            _ => bands.push(Band::up_to(upper, color)),
        }
    }
    // The last cut is the literal 255, so validation cannot fail.
    BandSet::new(bands).unwrap_or_else(|_| unreachable!())
}

/// The text glyph gradient, darkest glyph for the brightest intensities.
pub fn glyph_bands() -> BandSet<&'static str> {
    let bands = vec![
        Band::up_to(55, "  "),
        Band::up_to(105, "\u{2591}\u{2591}"),
        Band::up_to(155, "\u{2592}\u{2592}"),
        Band::up_to(205, "\u{2593}\u{2593}"),
        Band::up_to(255, "\u{2588}\u{2588}"),
    ];
    BandSet::new(bands).unwrap_or_else(|_| unreachable!())
}
