//! Output artifact writing
//!
//! The artifact lives next to the input, named by appending
//! [`OUTPUT_SUFFIX`] to the full input path.

use crate::ascii::GlyphGrid;
use crate::config::OUTPUT_SUFFIX;
use crate::error::{AsciifyError, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Path of the artifact for `input`: the full input path plus `.txt`
///
/// `photos/cat.png` becomes `photos/cat.png.txt`.
pub fn output_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(OUTPUT_SUFFIX);
    PathBuf::from(path)
}

/// Write every glyph row verbatim, then flush
pub fn write_rows<W: Write>(writer: &mut W, glyphs: &GlyphGrid) -> io::Result<()> {
    for row in glyphs.rows() {
        writer.write_all(row)?;
    }
    writer.flush()
}

/// Write `glyphs` to the artifact path derived from `input`
///
/// Any existing artifact is truncated. On a failed write the partial file is
/// removed before the error is returned.
///
/// # Errors
/// [`AsciifyError::Io`] if the file cannot be created or written,
/// [`AsciifyError::Cleanup`] if the partial file could not be removed.
pub fn write_artifact(input: &Path, glyphs: &GlyphGrid) -> Result<PathBuf> {
    let path = output_path(input);

    let file = File::create(&path).map_err(|source| AsciifyError::Io {
        path: path.clone(),
        source,
    })?;

    let written = {
        let mut writer = BufWriter::new(file);
        write_rows(&mut writer, glyphs)
        // writer (and the file handle) dropped here
    };

    match written {
        Ok(()) => {
            log::debug!("Wrote {} bytes to {}", glyphs.byte_len(), path.display());
            Ok(path)
        }
        Err(err) => Err(discard_partial(path, err)),
    }
}

/// Remove a partially written artifact and build the error to report
fn discard_partial(path: PathBuf, write_error: io::Error) -> AsciifyError {
    log::warn!(
        "Write to {} failed ({write_error}), removing partial output",
        path.display()
    );

    match fs::remove_file(&path) {
        Ok(()) => AsciifyError::Io {
            path,
            source: write_error,
        },
        Err(source) => AsciifyError::Cleanup {
            path,
            source,
            write_error,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::brightness_to_glyphs;
    use crate::grid::Grid;
    use tempfile::TempDir;

    /// Writer that accepts `limit` bytes and then fails
    struct FailingWriter {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() >= self.limit {
                return Err(io::Error::other("device full"));
            }
            let n = buf.len().min(self.limit - self.written.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sample_glyphs(width: u32, height: u32) -> GlyphGrid {
        brightness_to_glyphs(&Grid::from_fn(width, height, |x, _| x * 20))
    }

    #[test]
    fn test_output_path_keeps_directories() {
        assert_eq!(
            output_path(Path::new("photos/2024/cat.png")),
            PathBuf::from("photos/2024/cat.png.txt")
        );
    }

    #[test]
    fn test_output_path_no_extension() {
        assert_eq!(output_path(Path::new("image")), PathBuf::from("image.txt"));
    }

    #[test]
    fn test_write_rows_verbatim() {
        let glyphs = sample_glyphs(3, 2);
        let mut out = Vec::new();
        write_rows(&mut out, &glyphs).unwrap();
        assert_eq!(out, glyphs.rows().concat());
    }

    #[test]
    fn test_write_rows_propagates_failure() {
        let glyphs = sample_glyphs(4, 4);
        let mut writer = FailingWriter {
            written: Vec::new(),
            limit: 12,
        };
        let err = write_rows(&mut writer, &glyphs).unwrap_err();
        assert_eq!(err.to_string(), "device full");
        assert_eq!(writer.written.len(), 12);
    }

    #[test]
    fn test_write_artifact_creates_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("img.png");
        let glyphs = sample_glyphs(3, 2);

        let path = write_artifact(&input, &glyphs).unwrap();

        assert_eq!(path, dir.path().join("img.png.txt"));
        assert_eq!(fs::read(&path).unwrap(), glyphs.rows().concat());
    }

    #[test]
    fn test_write_artifact_truncates() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("img.png");
        let target = output_path(&input);
        fs::write(&target, vec![b'x'; 4096]).unwrap();

        let glyphs = sample_glyphs(2, 2);
        write_artifact(&input, &glyphs).unwrap();

        assert_eq!(fs::read(&target).unwrap().len(), glyphs.byte_len());
    }

    #[test]
    fn test_write_artifact_missing_directory() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("no-such-dir").join("img.png");

        let err = write_artifact(&input, &sample_glyphs(1, 1)).unwrap_err();

        assert!(matches!(err, AsciifyError::Io { .. }));
        assert!(!output_path(&input).exists());
    }

    #[test]
    fn test_discard_partial_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.png.txt");
        fs::write(&path, b"half a ro").unwrap();

        let err = discard_partial(path.clone(), io::Error::other("device full"));

        assert!(matches!(err, AsciifyError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_discard_partial_reports_cleanup_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("already-gone.png.txt");

        let err = discard_partial(path, io::Error::other("device full"));

        match err {
            AsciifyError::Cleanup { write_error, .. } => {
                assert_eq!(write_error.to_string(), "device full");
            }
            other => panic!("expected cleanup error, got {other:?}"),
        }
    }
}
