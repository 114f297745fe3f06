//! CLI command handlers.

mod config;
mod fetch;

pub use config::run_config;
pub use fetch::run_fetch;

use anyhow::Result;
use imgfetch_core::config::{self as core_config, FetchConfig};
use std::path::Path;

/// Loads the explicit config file if one was given, else the XDG one.
fn load_config(explicit: Option<&Path>) -> Result<FetchConfig> {
    let cfg = match explicit {
        Some(path) => core_config::load_from_path(path)?,
        None => core_config::load()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}
