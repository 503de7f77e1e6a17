//! Width-constrained image resizing.
//!
//! Provides aspect-ratio arithmetic, resampling filter selection,
//! Lanczos3 resizing, and file decode/encode with typed errors.

use std::path::PathBuf;

pub mod dimensions;
pub mod filter;
pub mod io;
pub mod resize;

// Re-exports for convenience
pub use dimensions::Dimensions;
pub use filter::ResampleFilter;
pub use io::{load_image, probe_dimensions, save_image};
pub use resize::resize_to_width;

/// Errors that can occur while resizing an image file.
#[derive(Debug, thiserror::Error)]
pub enum ResizeError {
    #[error("Source image not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Target width must be a positive integer, got {0}")]
    InvalidTargetWidth(u32),

    #[error("Cannot scale {original} to width {target_width}: resulting height is out of range")]
    DegenerateDimensions {
        original: Dimensions,
        target_width: u32,
    },

    #[error("Unknown resampling filter: {0}")]
    UnknownFilter(String),
}

/// Result type alias for resize-engine operations.
pub type Result<T> = std::result::Result<T, ResizeError>;
