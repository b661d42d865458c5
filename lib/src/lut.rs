//! Glyph ramp lookup
//!
//! The ramp runs from visually sparse characters to visually dense ones.
//! Brightness is mapped onto it by percentage of the reference maximum.

use crate::config::MAX_BRIGHTNESS;

/// Density-ordered character ramp, lightest first.
///
/// `"` and `\` each appear twice; the duplicates are part of the ramp.
pub const GLYPH_RAMP: &[u8; 67] =
    b"\"`^\\\",:;Il!i~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Index into [`GLYPH_RAMP`] for `value` relative to `max_value`
///
/// Computes `floor(len * value / max_value)` and clamps it to the last ramp
/// slot, so `value == max_value` (or anything above it) selects the densest
/// glyph. A zero `max_value` selects the lightest glyph.
pub fn glyph_index(value: u32, max_value: u32) -> usize {
    if max_value == 0 {
        return 0;
    }

    let len = GLYPH_RAMP.len() as u64;
    let index = len * u64::from(value) / u64::from(max_value);

    index.min(len - 1) as usize
}

/// Ramp character for a brightness value in `0..=MAX_BRIGHTNESS`
pub fn get_glyph(brightness: u32) -> u8 {
    GLYPH_RAMP[glyph_index(brightness, MAX_BRIGHTNESS)]
}
