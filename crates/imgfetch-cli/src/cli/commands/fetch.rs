//! `imgfetch fetch [URL] [-o PATH]` – download the image and save it.

use anyhow::Result;
use imgfetch_core::{fetch_and_save, FetchRequest};
use std::path::{Path, PathBuf};

use super::load_config;

/// Runs one fetch-and-save and returns the confirmation line.
pub fn run_fetch(
    config: Option<&Path>,
    url: Option<String>,
    output: Option<PathBuf>,
) -> Result<String> {
    let cfg = load_config(config)?;
    let req = FetchRequest::from_config(&cfg, url, output);
    let report = fetch_and_save(&req)?;
    Ok(format!("Image saved successfully to {}", report.path.display()))
}
