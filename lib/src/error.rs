//! Error types for the conversion pipeline

use std::io;
use std::path::PathBuf;

/// Errors that can occur while converting an image to ASCII art.
///
/// Every variant is fatal to the conversion; no partial output is kept.
#[derive(Debug, thiserror::Error)]
pub enum AsciifyError {
    /// The input path does not resolve to a readable file
    #[error("could not find image file to read in: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file contents are not a valid PNG or JPEG image
    #[error("failed to decode image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Creating, writing or flushing the output artifact failed
    #[error("failed to write output file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing failed and the partial artifact could not be removed either
    #[error(
        "failed to remove partial output file {} after write error: {write_error}",
        .path.display()
    )]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
        write_error: io::Error,
    },
}

/// Result type alias for asciify operations.
pub type Result<T> = std::result::Result<T, AsciifyError>;
