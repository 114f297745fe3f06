pub mod config;
pub mod logging;

pub mod destination;
pub mod error;
pub mod fetch;
pub mod http;
pub mod storage;

pub use error::{FetchError, Stage};
pub use fetch::{fetch_and_save, FetchRequest, SaveReport};
