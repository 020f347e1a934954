//! Decoding image bytes into pixel buffers.

use std::io::Cursor;

use image::ImageReader;
use tracing::debug;

use super::{resize, CodecError, WORKING_HEIGHT, WORKING_WIDTH};
use crate::buffer::PixelBuffer;

/// Decode PNG or JPEG bytes into an RGB buffer.
///
/// Alpha is dropped; the filter engine works on RGB only.
///
/// # Errors
///
/// Returns `CodecError::InvalidFormat` if the format cannot be recognized.
/// Returns `CodecError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer, CodecError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CodecError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(CodecError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| CodecError::CorruptedFile(e.to_string()))?;

    PixelBuffer::from_rgb_image(img.into_rgb8()).map_err(|e| CodecError::CorruptedFile(e.to_string()))
}

/// Decode an image and scale it to the working resolution.
///
/// # Returns
///
/// The working buffer and the source `(width, height)`, which
/// [`super::export_png`] uses to restore the original size.
pub fn load_for_editing(bytes: &[u8]) -> Result<(PixelBuffer, (u32, u32)), CodecError> {
    let decoded = decode_image(bytes)?;
    let source_dims = decoded.dimensions();
    debug!(width = source_dims.0, height = source_dims.1, "loaded image for editing");

    let working = resize(&decoded, WORKING_WIDTH, WORKING_HEIGHT)?;
    Ok((working, source_dims))
}
