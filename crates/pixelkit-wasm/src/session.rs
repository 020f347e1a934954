//! Editing session bindings.
//!
//! This module provides a JavaScript wrapper for [`EditSession`], which owns
//! the loaded image, the latest result and the selection. Front ends that
//! keep one image on screen should use this rather than pairing
//! `JsFilterEngine` with a free-standing `JsPointSet`. Clicks made before an
//! image is loaded are ignored. Filters always run on the loaded original.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = new JsEditSession(BigInt(Date.now()));
//! session.add_point(10, 10);            // false: nothing loaded yet
//!
//! session.load(loaded.take_image());
//! canvas.onclick = (e) => session.add_point(e.offsetX, e.offsetY);
//!
//! const result = session.apply("Blur Filter");
//! session.revert();
//! ```

use pixelkit_core::{EditSession, FilterError, FilterKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::types::JsPixelBuffer;

/// Editing session wrapper for JavaScript
#[wasm_bindgen]
pub struct JsEditSession {
    inner: EditSession<StdRng>,
}

#[wasm_bindgen]
impl JsEditSession {
    /// Create an empty session. `seed` drives the noise filters.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: EditSession::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Load an image (copied into the session) and clear the selection.
    pub fn load(&mut self, image: &JsPixelBuffer) {
        self.inner.load(image.as_buffer().clone());
    }

    /// Whether an image has been loaded
    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.inner.original().is_some()
    }

    /// Place a selection point.
    ///
    /// Returns false (and does nothing) if no image is loaded or four points
    /// are already placed.
    pub fn add_point(&mut self, x: i32, y: i32) -> bool {
        self.inner.add_point(x, y)
    }

    /// Remove points within the removal radius of `(x, y)`.
    pub fn remove_point(&mut self, x: f64, y: f64) -> usize {
        self.inner.remove_point(x, y)
    }

    pub fn clear_points(&mut self) {
        self.inner.clear_points();
    }

    /// Number of placed points
    #[wasm_bindgen(getter)]
    pub fn point_count(&self) -> usize {
        self.inner.points().len()
    }

    /// Point coordinates flattened as `[x0, y0, x1, y1, ...]`.
    pub fn points(&self) -> Vec<i32> {
        self.inner.points().points().iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// Apply the named filter to the loaded image within the selection.
    ///
    /// # Errors
    ///
    /// Throws if nothing is loaded or the label is unknown. Also throws when
    /// the selection holds 1-3 points, leaving the points in place.
    pub fn apply(&mut self, name: &str) -> Result<JsPixelBuffer, JsValue> {
        self.apply_named(name)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Restore the current image to the loaded original.
    pub fn revert(&mut self) {
        self.inner.revert();
    }

    /// Copy of the latest result, or `undefined` if nothing is loaded.
    pub fn current(&self) -> Option<JsPixelBuffer> {
        self.inner.current().cloned().map(JsPixelBuffer::from)
    }

    /// Copy of the loaded original, or `undefined` if nothing is loaded.
    pub fn original(&self) -> Option<JsPixelBuffer> {
        self.inner.original().cloned().map(JsPixelBuffer::from)
    }

    /// Current parameters as a plain object.
    pub fn params(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.params())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace parameters. Missing fields take their default values.
    pub fn set_params(&mut self, value: JsValue) -> Result<(), JsValue> {
        let params =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.set_params(params);
        Ok(())
    }
}

impl JsEditSession {
    fn apply_named(&mut self, name: &str) -> Result<JsPixelBuffer, FilterError> {
        let kind: FilterKind = name.parse()?;
        let output = self.inner.apply(kind)?;
        Ok(output.clone().into())
    }
}
