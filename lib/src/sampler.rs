use crate::config::{MAX_DIMENSION, RESIZE_FILTER};
use crate::error::{AsciifyError, Result};
use crate::grid::Grid;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// An RGB sample with each channel in `0..=255`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Reduce a 16-bit RGBA quad to 8-bit RGB, dropping alpha
    pub fn from_rgba16(rgba: [u16; 4]) -> Self {
        // u16::MAX / 257 == 255, so the quotient always fits in a u8
        let channel = |v: u16| (v / 257) as u8;
        Self::new(channel(rgba[0]), channel(rgba[1]), channel(rgba[2]))
    }
}

/// Pixel grid indexed by image coordinate
pub type PixelGrid = Grid<Pixel>;

/// Open and decode an image, detecting the format from its contents
///
/// # Errors
/// [`AsciifyError::NotFound`] if the file cannot be opened,
/// [`AsciifyError::Decode`] if it is not a supported image.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path).map_err(|source| AsciifyError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    // Sniff the magic bytes instead of trusting the extension
    let reader = reader
        .with_guessed_format()
        .map_err(|source| AsciifyError::Decode {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(source),
        })?;

    reader.decode().map_err(|source| AsciifyError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Dimensions to scale an image to, or `None` if it already fits
///
/// Resizing triggers when either side exceeds [`MAX_DIMENSION`]. The larger
/// side becomes exactly `MAX_DIMENSION` and the other is scaled by the same
/// factor, rounded to the nearest pixel and never below 1.
pub fn target_dimensions(width: u32, height: u32) -> Option<(u32, u32)> {
    if width <= MAX_DIMENSION && height <= MAX_DIMENSION {
        return None;
    }

    let scale = |side: u32, larger: u32| {
        let scaled = (f64::from(side) * f64::from(MAX_DIMENSION) / f64::from(larger)).round();
        (scaled as u32).max(1)
    };

    if width > height {
        Some((MAX_DIMENSION, scale(height, width)))
    } else {
        Some((scale(width, height), MAX_DIMENSION))
    }
}

/// Scale the image down so neither side exceeds [`MAX_DIMENSION`]
///
/// Uses Lanczos3 resampling. Images that already fit are returned as is.
pub fn resize_to_fit(image: DynamicImage) -> DynamicImage {
    let (width, height) = (image.width(), image.height());

    match target_dimensions(width, height) {
        Some((target_width, target_height)) => {
            log::debug!("Resizing {width}x{height} to {target_width}x{target_height}");
            image.resize_exact(target_width, target_height, RESIZE_FILTER)
        }
        None => image,
    }
}

/// Extract the RGB pixel grid, rows top to bottom and columns left to right
///
/// Channels are read at 16-bit depth and divided by 257, so 8-bit sources
/// come back unchanged and 16-bit sources land in `0..=255`.
pub fn sample_pixels(image: &DynamicImage) -> PixelGrid {
    let rgba = image.to_rgba16();
    Grid::from_fn(rgba.width(), rgba.height(), |x, y| {
        Pixel::from_rgba16(rgba.get_pixel(x, y).0)
    })
}

/// Decode the image at `path` and sample it, resizing oversized images first
///
/// # Errors
/// Propagates [`open_image`] failures; no partial grid is returned.
pub fn load_pixels(path: &Path) -> Result<PixelGrid> {
    log::info!("Reading in image pixel values");

    let image = open_image(path)?;
    log::debug!(
        "Decoded {} as {}x{} {:?}",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    let image = resize_to_fit(image);
    Ok(sample_pixels(&image))
}
