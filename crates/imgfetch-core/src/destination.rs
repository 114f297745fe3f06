//! Destination path resolution.
//!
//! A destination naming a directory gets a file name derived from the source
//! URL's last path segment, sanitized for Linux filesystems.

use std::path::{Path, PathBuf};

/// File name used when the URL path yields nothing usable.
pub const FALLBACK_FILENAME: &str = "image.jpg";

/// Resolves the file the body is written to.
///
/// If `dest` ends with a path separator or is an existing directory, the file
/// name is derived from `url` and joined onto it. Otherwise `dest` is returned
/// unchanged.
///
/// # Examples
///
/// - `https://example.com/a.jpg` + `/tmp/out/profile.jpg` → `/tmp/out/profile.jpg`
/// - `https://example.com/a.jpg` + `/tmp/out/` → `/tmp/out/a.jpg`
pub fn resolve_destination(url: &str, dest: &Path) -> PathBuf {
    if !names_directory(dest) {
        return dest.to_path_buf();
    }
    let name = filename_from_url_path(url)
        .map(|raw| sanitize_filename(&raw))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_FILENAME.to_string());
    dest.join(name)
}

fn names_directory(dest: &Path) -> bool {
    let trailing_sep = dest
        .as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator);
    trailing_sep || dest.is_dir()
}

/// Extracts the last path segment from a URL for use as a file name.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Sanitizes a candidate file name for safe use on Linux.
///
/// - Replaces NUL, `/`, `\`, whitespace and control characters with `_`
/// - Collapses consecutive underscores
/// - Trims leading/trailing spaces, dots and underscores
/// - Limits length to 255 bytes (Linux NAME_MAX)
pub fn sanitize_filename(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let unsafe_char = c == '/' || c == '\\' || c.is_control() || c.is_whitespace();
        if unsafe_char || c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.' || c == '_');

    let mut take = trimmed.len().min(NAME_MAX);
    while !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    trimmed[..take].to_string()
}
