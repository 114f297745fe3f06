//! `imgfetch config` – show where settings come from and what they resolve to.

use anyhow::Result;
use imgfetch_core::config;
use std::path::Path;

use super::load_config;

pub fn run_config(explicit: Option<&Path>) -> Result<String> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    let cfg = load_config(explicit)?;
    let source = if path.exists() { "" } else { " (not found, using defaults)" };
    let body = toml::to_string_pretty(&cfg)?;
    Ok(format!("# {}{}\n{}", path.display(), source, body.trim_end()))
}
