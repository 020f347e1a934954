//! Selection point bindings.
//!
//! The front end translates click positions into buffer coordinates and
//! forwards them here. Left click adds a point, right click removes nearby
//! points; the filter engine clears the set after each successful filter.
//!
//! A point set on its own does not know whether an image is loaded. Use
//! `JsEditSession` when clicks before loading must be ignored.

use pixelkit_core::PointSet;
use wasm_bindgen::prelude::*;

/// Selection points wrapper for JavaScript
#[wasm_bindgen]
#[derive(Default)]
pub struct JsPointSet {
    inner: PointSet,
}

#[wasm_bindgen]
impl JsPointSet {
    /// Create an empty selection
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point. Returns false if four points are already placed.
    pub fn add(&mut self, x: i32, y: i32) -> bool {
        self.inner.add(x, y)
    }

    /// Remove points within the removal radius of `(x, y)`.
    pub fn remove(&mut self, x: f64, y: f64) -> usize {
        self.inner.remove_near(x, y)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Number of placed points
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// Whether four points form a complete rectangle
    #[wasm_bindgen(getter)]
    pub fn complete(&self) -> bool {
        self.inner.is_complete()
    }

    /// Point coordinates flattened as `[x0, y0, x1, y1, ...]` for drawing markers.
    pub fn coordinates(&self) -> Vec<i32> {
        self.inner.points().iter().flat_map(|p| [p.x, p.y]).collect()
    }
}

impl JsPointSet {
    pub(crate) fn inner_mut(&mut self) -> &mut PointSet {
        &mut self.inner
    }
}
