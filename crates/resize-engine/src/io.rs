//! Decoding and encoding image files.
//!
//! Sources are decoded by content sniffing, so a misnamed file still loads.
//! Outputs are encoded in the format implied by the destination extension.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::debug;

use crate::{Dimensions, ResizeError, Result};

/// Decode an image file.
///
/// A missing file maps to [`ResizeError::FileNotFound`]; every other read or
/// decode failure maps to [`ResizeError::Decode`].
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let img = open_reader(path)?
        .decode()
        .map_err(|e| decode_error(path, e))?;

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "Decoded image"
    );
    Ok(img)
}

/// Read image dimensions from the file header without decoding pixel data.
pub fn probe_dimensions(path: impl AsRef<Path>) -> Result<Dimensions> {
    let path = path.as_ref();
    let dims = open_reader(path)?
        .into_dimensions()
        .map_err(|e| decode_error(path, e))?;
    Ok(Dimensions::from(dims))
}

/// Encode an image to `path`, choosing the format from its extension.
pub fn save_image(img: &DynamicImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    img.save(path).map_err(|source| ResizeError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Encoded image"
    );
    Ok(())
}

fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>> {
    let reader = ImageReader::open(path).map_err(|e| io_error(path, e))?;
    reader.with_guessed_format().map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, err: std::io::Error) -> ResizeError {
    if err.kind() == std::io::ErrorKind::NotFound {
        ResizeError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        decode_error(path, ImageError::IoError(err))
    }
}

fn decode_error(path: &Path, source: ImageError) -> ResizeError {
    ResizeError::Decode {
        path: path.to_path_buf(),
        source,
    }
}
