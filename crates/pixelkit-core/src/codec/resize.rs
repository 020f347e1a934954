//! Scaling between source and working resolution.

use image::imageops::{self, FilterType};

use super::CodecError;
use crate::buffer::PixelBuffer;

/// Smooth scaling for both load and export.
const SCALE_FILTER: FilterType = FilterType::Lanczos3;

/// Scale a buffer to exactly `width x height`.
///
/// A buffer that already has the target size is returned as a copy without
/// resampling.
///
/// # Errors
///
/// Returns `CodecError::InvalidDimensions` if either target dimension is zero.
pub fn resize(buffer: &PixelBuffer, width: u32, height: u32) -> Result<PixelBuffer, CodecError> {
    match (width, height) {
        (0, _) | (_, 0) => Err(CodecError::InvalidDimensions { width, height }),
        target if target == buffer.dimensions() => Ok(buffer.clone()),
        _ => {
            let scaled = imageops::resize(&buffer.to_rgb_image(), width, height, SCALE_FILTER);
            PixelBuffer::from_rgb_image(scaled)
                .map_err(|e| CodecError::CorruptedFile(e.to_string()))
        }
    }
}
