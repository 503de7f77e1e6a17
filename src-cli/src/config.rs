//! The resize job: fixed paths, width and filter.

use std::path::{Path, PathBuf};

use resize_engine::ResampleFilter;

/// Source image, read from the working directory.
pub const SOURCE_PATH: &str = "SHRB_img.png";

/// Resized output, written to the working directory.
pub const DESTINATION_PATH: &str = "SHRB_sm_img.png";

/// Width of the resized output in pixels.
pub const TARGET_WIDTH: u32 = 300;

/// Everything one run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub target_width: u32,
    pub filter: ResampleFilter,
}

impl Default for ResizeJob {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_PATH),
            destination: PathBuf::from(DESTINATION_PATH),
            target_width: TARGET_WIDTH,
            filter: ResampleFilter::Lanczos3,
        }
    }
}

impl ResizeJob {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the source image path.
    pub fn with_source(mut self, path: impl AsRef<Path>) -> Self {
        self.source = path.as_ref().to_path_buf();
        self
    }

    /// Builder: set the output image path.
    pub fn with_destination(mut self, path: impl AsRef<Path>) -> Self {
        self.destination = path.as_ref().to_path_buf();
        self
    }

    /// Builder: set the output width.
    pub fn with_target_width(mut self, width: u32) -> Self {
        self.target_width = width;
        self
    }

    /// Builder: set the resampling filter.
    pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }
}
