use crate::grid::Grid;
use crate::sampler::{Pixel, PixelGrid};

/// Brightness grid with the same shape as the sampled pixel grid
pub type BrightnessGrid = Grid<u32>;

/// Unweighted mean of the red, green and blue channels, truncated
///
/// Formula: L = (R + G + B) / 3 in integer arithmetic, so `(10, 10, 11)`
/// gives 10.
pub fn brightness(pixel: &Pixel) -> u32 {
    (u32::from(pixel.r) + u32::from(pixel.g) + u32::from(pixel.b)) / 3
}

/// Reduce every pixel to its brightness
pub fn calculate_brightness(pixels: &PixelGrid) -> BrightnessGrid {
    pixels.map(brightness)
}
