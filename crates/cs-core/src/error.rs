//! Error taxonomy of capture and persistence operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::clip::FormatId;
use crate::ids::ClipId;

/// Why a capture produced no clip.
///
/// None of these are fatal; the caller logs the reason and moves on.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("clipboard owner requested that this content not be recorded")]
    PrivacyBlocked,

    #[error("clipboard unavailable: {0}")]
    SourceUnavailable(String),

    #[error("format {format} is {size} bytes, larger than the {max} byte limit")]
    SizeExceeded {
        format: FormatId,
        size: usize,
        max: u64,
    },

    #[error("no clipboard formats captured")]
    NoFormatsCaptured,
}

#[derive(Debug, Error)]
pub enum ClipError {
    #[error("clip has no formats")]
    InvalidClip,

    #[error("clip {0} not found")]
    NotFound(ClipId),

    #[error("store failure: {0:#}")]
    StoreFailure(anyhow::Error),

    #[error("failed to write export file {path}")]
    ExportIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClipError {
    pub fn store(err: anyhow::Error) -> Self {
        Self::StoreFailure(err)
    }
}
