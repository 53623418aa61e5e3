use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon size must be positive, got {0}")]
    InvalidSize(u32),

    #[error("failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
