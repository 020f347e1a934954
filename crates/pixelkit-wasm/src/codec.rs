//! Image load/save bindings.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const loaded = load_for_editing(bytes);   // 600x500 working copy
//! // ... apply filters to loaded.image ...
//! const png = export_png(result, loaded.source_width, loaded.source_height);
//! ```

use pixelkit_core::codec;
use wasm_bindgen::prelude::*;

use crate::types::JsPixelBuffer;

/// A working-resolution image plus the size it was loaded at.
#[wasm_bindgen]
pub struct JsLoadedImage {
    image: Option<JsPixelBuffer>,
    source_width: u32,
    source_height: u32,
}

#[wasm_bindgen]
impl JsLoadedImage {
    /// Take the working image. Can only be called once.
    pub fn take_image(&mut self) -> Option<JsPixelBuffer> {
        self.image.take()
    }

    #[wasm_bindgen(getter)]
    pub fn source_width(&self) -> u32 {
        self.source_width
    }

    #[wasm_bindgen(getter)]
    pub fn source_height(&self) -> u32 {
        self.source_height
    }
}

/// Decode PNG or JPEG bytes at their native size.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
    codec::decode_image(bytes)
        .map(JsPixelBuffer::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode an image and scale it to the working resolution.
#[wasm_bindgen]
pub fn load_for_editing(bytes: &[u8]) -> Result<JsLoadedImage, JsValue> {
    let (working, (source_width, source_height)) =
        codec::load_for_editing(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsLoadedImage {
        image: Some(working.into()),
        source_width,
        source_height,
    })
}

/// Encode an image as PNG bytes.
#[wasm_bindgen]
pub fn encode_png(image: &JsPixelBuffer) -> Result<Vec<u8>, JsValue> {
    codec::encode_png(image.as_buffer()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Scale an image back to `width x height` and encode it as PNG.
#[wasm_bindgen]
pub fn export_png(image: &JsPixelBuffer, width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    codec::export_png(image.as_buffer(), width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}


/// Error paths build a `JsValue` and can only run on wasm32 targets.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_garbage() {
        assert!(decode_image(&[0, 1, 2, 3, 4, 5, 6, 7]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_export_zero_size() {
        let img = JsPixelBuffer::new(2, 2, vec![0u8; 12]).unwrap();
        assert!(export_png(&img, 0, 10).is_err());
    }
}
