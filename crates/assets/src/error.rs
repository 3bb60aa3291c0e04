use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a usable asset from a path.
///
/// These are non-fatal by design: the frame loop logs the failure and keeps
/// rendering without the affected object.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("{} is not a typeface font: {reason}", path.display())]
    Typeface { path: PathBuf, reason: String },
}
