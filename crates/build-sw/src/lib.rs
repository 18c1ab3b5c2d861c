//! Service worker generation for the singularity web app.
//!
//! [`service_worker_config`] describes what gets precached and how runtime
//! requests are cached; a [`GenerateSw`] tool turns that description into
//! `service-worker.js` inside the public output directory.

use std::io::{self, Write};

mod config;
mod error;
mod tool;

pub use config::{
    service_worker_config, CacheOptions, CacheableResponse, Expiration, GenerateSwConfig,
    RuntimeCaching, Strategy, CACHE_PREFIX, MAX_FILE_SIZE_TO_CACHE, SW_FILE_NAME,
};
pub use error::{Error, Result};
pub use tool::{BuildReport, GenerateSw, Workbox};

/// Generates the service worker for `public_out_dir` with `tool`.
///
/// The directory is handed to the tool as is; a bad path fails however the
/// tool fails.
pub fn build<T>(tool: &T, public_out_dir: &str) -> Result<BuildReport>
where
    T: GenerateSw + ?Sized,
{
    let config = service_worker_config(public_out_dir);
    tracing::debug!(sw_dest = %config.sw_dest, "generating service worker");

    let report = tool.generate_sw(&config)?;
    tracing::info!(
        count = report.count,
        size = report.size,
        warnings = report.warnings.len(),
        "precache manifest written"
    );

    Ok(report)
}

/// Writes each tool warning on its own line.
pub fn print_warnings<W: Write>(out: &mut W, report: &BuildReport) -> io::Result<()> {
    for warning in &report.warnings {
        writeln!(out, "{warning}")?;
    }
    out.flush()
}
