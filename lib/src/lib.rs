//! asciify - image to ASCII art converter
//!
//! Decodes a PNG or JPEG, caps it at 200 pixels on its longer side, reduces
//! every pixel to its mean brightness and maps that onto a density-ordered
//! character ramp. The result is written next to the input as `<path>.txt`.
//!
//! # Example
//! ```no_run
//! use std::path::Path;
//!
//! let output = asciify::convert_image_to_ascii(Path::new("photo.jpg")).unwrap();
//! println!("Output saved to file: {}", output.display());
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod grid;
pub mod luminance;
pub mod lut;
pub mod processor;
pub mod sampler;
pub mod writer;

// Re-export main types for convenience
pub use ascii::GlyphGrid;
pub use error::{AsciifyError, Result};
pub use grid::Grid;
pub use processor::{convert_image_to_ascii, render_ascii};
pub use sampler::Pixel;
