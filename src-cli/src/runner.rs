//! Decode, resample, encode.

use resize_engine::{
    Dimensions, ResizeError, Result, load_image, probe_dimensions, resize_to_width, save_image,
};
use tracing::{debug, info};

use crate::config::ResizeJob;

/// Sizes before and after one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeReport {
    pub original: Dimensions,
    pub resized: Dimensions,
}

impl ResizeReport {
    /// Console lines announcing the result.
    pub fn summary_lines(&self) -> [String; 3] {
        [
            "Image resized successfully!".to_string(),
            format!("Original size: {}", self.original),
            format!("New size: {}", self.resized),
        ]
    }
}

/// Run one resize job.
///
/// The source header is probed first so bad dimensions are rejected before
/// the pixels are decoded. Nothing is written unless decoding and resampling
/// both succeed.
pub fn run(job: &ResizeJob) -> Result<ResizeReport> {
    info!(
        source = %job.source.display(),
        destination = %job.destination.display(),
        width = job.target_width,
        filter = %job.filter,
        "Starting resize"
    );

    if job.target_width == 0 {
        return Err(ResizeError::InvalidTargetWidth(job.target_width));
    }

    let header = probe_dimensions(&job.source)?;
    let planned = header.scale_to_width(job.target_width)?;
    debug!(%header, %planned, "Planned output size");

    let img = load_image(&job.source)?;
    let resized = resize_to_width(&img, job.target_width, job.filter)?;
    save_image(&resized, &job.destination)?;

    let report = ResizeReport {
        original: Dimensions::of(&img),
        resized: Dimensions::of(&resized),
    };
    info!(
        original = %report.original,
        resized = %report.resized,
        "Resize complete"
    );
    Ok(report)
}
