//! Custom error types for icon-invert.

use std::path::PathBuf;

use image::ExtendedColorType;
use thiserror::Error;

/// Main error type for the icon-invert library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to list the source directory.
    #[error("failed to list directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The file does not store RGBA pixels.
    #[error("cannot split {path} into RGBA planes: stored as {color:?}")]
    NotRgba {
        path: PathBuf,
        color: ExtendedColorType,
    },

    /// Channel planes of different sizes were merged.
    #[error("plane size mismatch: expected {expected:?}, got {actual:?}")]
    PlaneMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Failed to save an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Failed to write progress output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Stage of a conversion at which an [`Error`] occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Configuration was rejected before any file was touched.
    Config,
    /// Enumerating the source directory.
    List,
    /// Reading and decoding a source image.
    Decode,
    /// Splitting, inverting or merging channel planes.
    Transform,
    /// Encoding and writing the output image.
    Encode,
    /// Writing progress lines.
    Output,
}

impl Error {
    /// The stage this error belongs to.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::InvalidParameter { .. } => Stage::Config,
            Self::ListDir { .. } => Stage::List,
            Self::ImageLoad { .. } | Self::NotRgba { .. } => Stage::Decode,
            Self::PlaneMismatch { .. } => Stage::Transform,
            Self::ImageSave { .. } => Stage::Encode,
            Self::Io(_) => Stage::Output,
        }
    }
}

/// Result type alias for icon-invert operations.
pub type Result<T> = std::result::Result<T, Error>;
