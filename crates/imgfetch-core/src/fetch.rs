//! The fetch-and-save operation.
//!
//! `Start → DirectoryEnsured → Downloaded → Saved`; any step may fail, and the
//! error carries the last stage reached. Nothing is retried and a failed run
//! leaves no cleanup behind.

use crate::config::{FetchConfig, HttpConfig};
use crate::destination::resolve_destination;
use crate::error::{FetchError, Stage};
use crate::{http, storage};
use std::path::{Path, PathBuf};

/// Inputs of one run.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub source_url: String,
    pub destination: PathBuf,
    pub http: HttpConfig,
}

impl FetchRequest {
    pub fn new(source_url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source_url: source_url.into(),
            destination: destination.into(),
            http: HttpConfig::default(),
        }
    }

    /// Builds a request from config, with optional overrides from the command line.
    pub fn from_config(cfg: &FetchConfig, url: Option<String>, output: Option<PathBuf>) -> Self {
        Self {
            source_url: url.unwrap_or_else(|| cfg.source_url.clone()),
            destination: output.unwrap_or_else(|| cfg.destination.clone()),
            http: cfg.http.clone(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    /// File the body was written to.
    pub path: PathBuf,
    pub bytes: u64,
    pub content_type: Option<String>,
}

fn reached(stage: Stage, path: &Path) {
    tracing::debug!(stage = %stage, path = %path.display(), "stage reached");
}

/// Ensures the destination's parent exists, GETs `source_url`, and writes the
/// body to the destination, replacing any existing file.
pub fn fetch_and_save(req: &FetchRequest) -> Result<SaveReport, FetchError> {
    let path = resolve_destination(&req.source_url, &req.destination);
    tracing::info!(url = %req.source_url, path = %path.display(), "fetch-and-save");

    let result = run_stages(req, &path);
    match &result {
        Ok(report) => tracing::info!(
            path = %report.path.display(),
            bytes = report.bytes,
            content_type = report.content_type.as_deref().unwrap_or("-"),
            "image saved"
        ),
        Err(e) => tracing::warn!(stage = %e.stage(), error = %e, "fetch-and-save failed"),
    }
    result
}

/// Failures carry their stage through `FetchError::stage`.
fn run_stages(req: &FetchRequest, path: &Path) -> Result<SaveReport, FetchError> {
    storage::ensure_parent_dir(path)?;
    reached(Stage::DirectoryEnsured, path);

    let fetched = http::get(&req.source_url, &req.http)?;
    reached(Stage::Downloaded, path);

    let bytes = storage::write_file(path, &fetched.body)?;
    reached(Stage::Saved, path);

    Ok(SaveReport {
        path: path.to_path_buf(),
        bytes,
        content_type: fetched.content_type,
    })
}
