pub mod database;
pub mod overlay;
pub mod report;
pub mod settings;
pub mod tracking;
pub mod video;

use thiserror::Error;

/// Typed failures of the boundary operations. Everything else that can go
/// wrong (driver errors, serialization) stays an opaque `anyhow` error and is
/// reported as an internal failure at the handler boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no active video is configured")]
    NoActiveVideo,

    #[error("unrecognized video url: {0}")]
    UnrecognizedVideoUrl(String),

    #[error("no data found: {0}")]
    NoData(String),
}
