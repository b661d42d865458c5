use crate::ascii::{GlyphGrid, brightness_to_glyphs};
use crate::error::{AsciifyError, Result};
use crate::luminance::calculate_brightness;
use crate::sampler::load_pixels;
use crate::writer::write_artifact;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Confirm `path` is an existing regular file before any work is done
fn ensure_input_file(path: &Path) -> Result<()> {
    let not_found = |source| AsciifyError::NotFound {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(not_found)?;
    if !metadata.is_file() {
        return Err(not_found(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }

    Ok(())
}

/// Runs the image to glyph pipeline without writing anything
///
/// 1. Decode and sample pixels (resizing images larger than 200px)
/// 2. Reduce each pixel to its brightness
/// 3. Map brightness onto the glyph ramp
///
/// # Errors
/// [`AsciifyError::NotFound`] if `path` is not a readable file,
/// [`AsciifyError::Decode`] if it is not a PNG or JPEG image.
pub fn render_ascii(path: &Path) -> Result<GlyphGrid> {
    ensure_input_file(path)?;

    let pixels = load_pixels(path)?;
    let brightness = calculate_brightness(&pixels);
    drop(pixels);

    Ok(brightness_to_glyphs(&brightness))
}

/// Converts the image at `path` to ASCII art saved as `<path>.txt`
///
/// Stages run strictly in order and the first failure aborts the rest.
/// Nothing is written unless every earlier stage succeeded.
///
/// # Returns
/// The path of the written artifact
///
/// # Errors
/// Anything [`render_ascii`] reports, plus [`AsciifyError::Io`] or
/// [`AsciifyError::Cleanup`] from writing the artifact.
pub fn convert_image_to_ascii(path: &Path) -> Result<PathBuf> {
    let glyphs = render_ascii(path)?;
    write_artifact(path, &glyphs)
}
