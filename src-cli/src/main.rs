//! Resize `SHRB_img.png` to 300px wide as `SHRB_sm_img.png`.
//!
//! Takes no arguments. Set `RUST_LOG=debug` to trace each step on stderr.

use anyhow::Context;

use logo_resizer_lib::logging;
use logo_resizer_lib::{ResizeJob, run};

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let job = ResizeJob::default();
    let report =
        run(&job).with_context(|| format!("Failed to resize {}", job.source.display()))?;

    for line in report.summary_lines() {
        println!("{line}");
    }
    Ok(())
}
