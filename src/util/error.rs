//! Error types for spritescan.

use crate::template::Role;
use thiserror::Error;

/// Result alias for spritescan operations.
pub type Result<T> = std::result::Result<T, SpriteScanError>;

/// Result alias used throughout the public API.
pub type SpriteScanResult<T> = Result<T>;

/// Errors that can occur while building templates or moving images in and out.
///
/// The scan itself never fails once an image is in memory; every condition it
/// encounters is a per-origin skip.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpriteScanError {
    /// No input image path was supplied.
    #[error("no input image given")]
    InputMissing,
    /// The input file could not be read.
    #[error("failed to read {path}: {reason}")]
    InputUnreadable { path: String, reason: String },
    /// The input bytes are not a decodable image.
    #[error("failed to decode image: {reason}")]
    DecodeFailure { reason: String },
    /// The output image could not be encoded or written.
    #[error("failed to encode image: {reason}")]
    EncodeFailure { reason: String },
    /// A template has no single-role cell for a required anchor.
    #[error("malformed template: no {missing} cell to anchor on")]
    MalformedTemplate { missing: Role },
    /// Width or height is zero or overflows.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Stride is smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Backing buffer is shorter than the dimensions require.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
}
