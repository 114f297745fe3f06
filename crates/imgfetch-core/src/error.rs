//! Error taxonomy for a fetch-and-save run.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Progress of a single run. Each step either advances to the next stage or fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    DirectoryEnsured,
    Downloaded,
    Saved,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Start => "start",
            Stage::DirectoryEnsured => "directory-ensured",
            Stage::Downloaded => "downloaded",
            Stage::Saved => "saved",
        };
        f.write_str(s)
    }
}

/// Any failure of a fetch-and-save run. All variants are handled the same way
/// by the caller; the split exists for logging and tests.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Creating the destination's ancestor directories failed.
    #[error("could not create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// libcurl failed before a response was received (DNS, connect, TLS, bad URL).
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The final response had a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u32 },
    /// Writing the body to the destination failed (permissions, disk full).
    #[error("could not write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    /// Last stage reached before the failure.
    pub fn stage(&self) -> Stage {
        match self {
            FetchError::CreateDir { .. } => Stage::Start,
            FetchError::Request { .. } | FetchError::Status { .. } => Stage::DirectoryEnsured,
            FetchError::Write { .. } => Stage::Downloaded,
        }
    }
}
