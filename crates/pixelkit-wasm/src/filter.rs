//! Filter bindings.
//!
//! Filters are requested by their display label (e.g. `"Blur Filter"`), the
//! same strings [`filter_names`] returns for populating a menu.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const engine = new JsFilterEngine(BigInt(Date.now()));
//! const points = new JsPointSet();
//! points.add(10, 10); points.add(200, 10); points.add(10, 150); points.add(200, 150);
//!
//! const filtered = engine.apply(image, "Sepia Filter", points);
//! // points.length === 0 now; the selection is one-shot
//! ```

use pixelkit_core::{apply_filter, FilterKind, FilterParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::points::JsPointSet;
use crate::types::JsPixelBuffer;

/// Labels of every available filter, in menu order.
#[wasm_bindgen]
pub fn filter_names() -> Vec<String> {
    FilterKind::ALL.iter().map(|k| k.label().to_string()).collect()
}

/// Filter runner holding parameters and the random source for noise.
#[wasm_bindgen]
pub struct JsFilterEngine {
    params: FilterParams,
    rng: StdRng,
}

#[wasm_bindgen]
impl JsFilterEngine {
    /// Create an engine with default parameters.
    ///
    /// Pass a fresh seed (e.g. `Date.now()`) for varied noise, or a fixed
    /// seed for reproducible output.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Self {
        Self {
            params: FilterParams::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Current parameters as a plain object.
    pub fn params(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.params).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace parameters. Missing fields take their default values.
    pub fn set_params(&mut self, value: JsValue) -> Result<(), JsValue> {
        self.params =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Apply the named filter inside the current selection.
    ///
    /// # Errors
    ///
    /// Throws if the label is unknown or the selection holds 1-3 points.
    /// On error the selection is left untouched.
    pub fn apply(
        &mut self,
        image: &JsPixelBuffer,
        name: &str,
        points: &mut JsPointSet,
    ) -> Result<JsPixelBuffer, JsValue> {
        self.apply_named(image, name, points)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsFilterEngine {
    fn apply_named(
        &mut self,
        image: &JsPixelBuffer,
        name: &str,
        points: &mut JsPointSet,
    ) -> Result<JsPixelBuffer, pixelkit_core::FilterError> {
        let kind: FilterKind = name.parse()?;
        let output = apply_filter(
            image.as_buffer(),
            kind,
            points.inner_mut(),
            &self.params,
            &mut self.rng,
        )?;
        Ok(output.into())
    }
}


/// Tests that require JsValue; run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_apply_unknown_filter_throws() {
        let mut engine = JsFilterEngine::new(7);
        let image = JsPixelBuffer::new(2, 2, vec![9u8; 12]).unwrap();
        assert!(engine.apply(&image, "Emboss Filter", &mut JsPointSet::new()).is_err());
    }

    #[wasm_bindgen_test]
    fn test_params_round_trip() {
        let mut engine = JsFilterEngine::new(7);
        let value = engine.params().unwrap();
        engine.set_params(value).unwrap();
        assert!(engine.params.is_default());
    }
}
