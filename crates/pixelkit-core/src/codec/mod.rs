//! Image loading and saving around the filter engine.
//!
//! This module provides functionality for:
//! - Decoding PNG and JPEG bytes into a [`PixelBuffer`]
//! - Resizing to and from the working resolution
//! - Encoding results as PNG
//!
//! # Working Resolution
//!
//! Loaded images are edited at [`WORKING_WIDTH`] x [`WORKING_HEIGHT`] so that
//! selection coordinates map directly to buffer pixels. On export the result
//! is scaled back to the source dimensions before encoding.

mod decode;
mod encode;
mod resize;

pub use decode::{decode_image, load_for_editing};
pub use encode::{encode_png, export_png};
pub use resize::resize;

use thiserror::Error;

/// Width images are edited at.
pub const WORKING_WIDTH: u32 = 600;

/// Height images are edited at.
pub const WORKING_HEIGHT: u32 = 500;

/// Error types for decode, encode and resize.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The bytes are not a recognized image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Encoding failed.
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}
