use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Image fetched when neither the config file nor the command line names one.
pub const DEFAULT_SOURCE_URL: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=500&h=500&fit=crop";

/// Destination used when none is configured, relative to the working directory.
pub const DEFAULT_DESTINATION: &str = "Profile/profile.jpg";

/// HTTP client settings (optional `[http]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Follow 3xx redirects to the final resource.
    pub follow_redirects: bool,
    /// Maximum number of redirects followed before giving up.
    pub max_redirections: u32,
    /// `User-Agent` sent with the GET. None = libcurl sends none.
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            follow_redirects: true,
            max_redirections: 10,
            user_agent: Some(concat!("imgfetch/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

/// Global configuration loaded from `~/.config/imgfetch/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Remote image to download.
    pub source_url: String,
    /// Local file (or directory) the image is written to.
    pub destination: PathBuf,
    pub http: HttpConfig,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            http: HttpConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::new()?;
    Ok(xdg_dirs.get_config_home().join("imgfetch").join("config.toml"))
}

/// Load configuration from the XDG config dir. A missing file yields defaults;
/// nothing is written to disk.
pub fn load() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(FetchConfig::default());
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<FetchConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = FetchConfig::default();
        assert_eq!(cfg.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(cfg.destination, PathBuf::from("Profile/profile.jpg"));
        assert!(cfg.http.follow_redirects);
        assert_eq!(cfg.http.max_redirections, 10);
        assert!(cfg
            .http
            .user_agent
            .as_deref()
            .unwrap()
            .starts_with("imgfetch/"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FetchConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_is_default() {
        let cfg: FetchConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, FetchConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            source_url = "https://example.com/a.jpg"
            destination = "/tmp/out/profile.jpg"

            [http]
            follow_redirects = false
            max_redirections = 2
        "#;
        let cfg: FetchConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.source_url, "https://example.com/a.jpg");
        assert_eq!(cfg.destination, PathBuf::from("/tmp/out/profile.jpg"));
        assert!(!cfg.http.follow_redirects);
        assert_eq!(cfg.http.max_redirections, 2);
        // Unset keys keep their defaults.
        assert_eq!(cfg.http.user_agent, HttpConfig::default().user_agent);
    }

    #[test]
    fn load_from_path_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"destination = \"shots/me.png\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from_path(f.path()).unwrap();
        assert_eq!(cfg.destination, PathBuf::from("shots/me.png"));
        assert_eq!(cfg.source_url, DEFAULT_SOURCE_URL);
    }

    #[test]
    fn load_from_path_rejects_bad_toml() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"destination = [").unwrap();
        f.flush().unwrap();
        let err = load_from_path(f.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("parse config"));
    }
}
