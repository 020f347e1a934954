//! Pixelkit WASM - WebAssembly bindings for Pixelkit
//!
//! This crate provides WASM bindings to expose the pixelkit-core filter
//! engine to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for pixel buffers
//! - `points` - Selection points for region-restricted filtering
//! - `filter` - Filter catalog and application
//! - `codec` - Image decoding, working-size loading and PNG export
//! - `session` - Editing session owning the loaded image and selection
//!
//! # Usage
//!
//! ```typescript
//! import init, { load_for_editing, JsEditSession } from '@pixelkit/wasm';
//!
//! await init();
//!
//! const loaded = load_for_editing(new Uint8Array(await file.arrayBuffer()));
//! const session = new JsEditSession(BigInt(Date.now()));
//! session.load(loaded.take_image());
//! const blurred = session.apply("Blur Filter");
//! ```

use wasm_bindgen::prelude::*;

mod codec;
mod filter;
mod points;
mod session;
mod types;

// Re-export public types
pub use codec::{decode_image, encode_png, export_png, load_for_editing, JsLoadedImage};
pub use filter::{filter_names, JsFilterEngine};
pub use points::JsPointSet;
pub use session::JsEditSession;
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
