//! PNG encoding for saving filtered images.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use super::{resize, CodecError};
use crate::buffer::PixelBuffer;

/// Encode a buffer as PNG bytes.
///
/// # Errors
///
/// Returns `CodecError::EncodingFailed` if the encoder rejects the data.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, CodecError> {
    let mut output = Vec::new();
    let encoder = PngEncoder::new(&mut output);
    encoder
        .write_image(
            buffer.as_bytes(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| CodecError::EncodingFailed(e.to_string()))?;
    Ok(output)
}

/// Scale a working buffer back to `(width, height)` and encode it as PNG.
pub fn export_png(buffer: &PixelBuffer, width: u32, height: u32) -> Result<Vec<u8>, CodecError> {
    let restored = resize(buffer, width, height)?;
    encode_png(&restored)
}
