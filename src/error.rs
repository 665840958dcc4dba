//! Error types for the conversion pipeline.

use std::path::PathBuf;

/// Errors that can occur while converting an image to Braille art.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be read or decoded
    #[error("Failed to load image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The width argument was not a positive integer
    #[error("Invalid width specified: {0:?}")]
    InvalidWidth(String),

    /// Luma bitmap and color grid do not describe the same cells
    #[error("Luma bitmap {luma:?} does not match color grid {colors:?}")]
    GridMismatch { luma: (u32, u32), colors: (u32, u32) },

    /// Writing the rendered output failed
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
