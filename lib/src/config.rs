//! Process-wide conversion constants
//!
//! Nothing here is configurable at runtime: output size is governed by
//! [`MAX_DIMENSION`] and the glyph ramp in [`crate::lut`].

use image::imageops::FilterType;

/// Largest width or height (in pixels) sampled from the source image.
///
/// Images with either side above this are scaled down so the larger side
/// lands exactly on it, keeping the aspect ratio.
pub const MAX_DIMENSION: u32 = 200;

/// Resampling filter used when an image has to be scaled down
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// How many glyph columns each pixel column produces.
///
/// Terminal cells are roughly twice as tall as they are wide, so each
/// sample is written twice to keep the rendered proportions.
pub const GLYPHS_PER_SAMPLE: usize = 2;

/// Reference maximum for brightness values fed to the glyph mapper
pub const MAX_BRIGHTNESS: u32 = 255;

/// Suffix appended to the full input path to name the output artifact
pub const OUTPUT_SUFFIX: &str = ".txt";

/// Line terminator written after every glyph row
pub const LINE_TERMINATOR: u8 = b'\n';

