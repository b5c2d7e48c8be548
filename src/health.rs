// src/health.rs
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Stamps `path` with the current Unix time in milliseconds.
pub fn write_marker<P: AsRef<Path>>(path: P) -> Result<i64> {
    let path = path.as_ref();
    let now = chrono::Utc::now().timestamp_millis();
    fs::write(path, format!("{}", now))
        .with_context(|| format!("failed to write health file {}", path.display()))?;
    Ok(now)
}
