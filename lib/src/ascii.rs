use crate::config::{GLYPHS_PER_SAMPLE, LINE_TERMINATOR};
use crate::luminance::BrightnessGrid;
use crate::lut::get_glyph;
use std::fmt;

/// Rows of ramp characters, each ending in a line feed
///
/// Every brightness sample occupies [`GLYPHS_PER_SAMPLE`] columns, so a grid
/// built from a `width × height` brightness grid has `height` rows of
/// `GLYPHS_PER_SAMPLE * width + 1` bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphGrid {
    rows: Vec<Vec<u8>>,
}

impl GlyphGrid {
    /// Rows in output order, terminators included
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Total serialized size in bytes
    pub fn byte_len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

impl fmt::Display for GlyphGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            // Ramp glyphs are all ASCII
            for &byte in row {
                write!(f, "{}", char::from(byte))?;
            }
        }
        Ok(())
    }
}

/// Build one output row from a row of brightness values
fn glyph_row(brightness_row: &[u32]) -> Vec<u8> {
    let mut row = Vec::with_capacity(brightness_row.len() * GLYPHS_PER_SAMPLE + 1);

    for &value in brightness_row {
        let glyph = get_glyph(value);
        // Repeat to counter the tall aspect of terminal cells
        row.extend(std::iter::repeat_n(glyph, GLYPHS_PER_SAMPLE));
    }

    row.push(LINE_TERMINATOR);
    row
}

/// Map every brightness value to its ramp glyph
pub fn brightness_to_glyphs(brightness: &BrightnessGrid) -> GlyphGrid {
    log::info!("Converting brightness matrix to ascii");

    GlyphGrid {
        rows: brightness.rows().map(glyph_row).collect(),
    }
}
