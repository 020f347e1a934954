//! Pixelkit Core - Region-gated image filter library
//!
//! This crate provides the filter engine for Pixelkit: a catalog of 22
//! pixel and neighborhood filters, a four-point rectangular selection that
//! restricts where a filter may write, and helpers for loading and saving
//! images around the engine.

pub mod buffer;
pub mod codec;
pub mod error;
pub mod filter;
pub mod roi;
pub mod session;

pub use buffer::{BufferError, Color, PixelBuffer};
pub use error::FilterError;
pub use filter::{apply_filter, apply_filter_in, FilterKind, FilterShape};
pub use roi::{Point, PointSet, Roi};
pub use session::EditSession;

/// Parameters for the filters that take one.
///
/// The defaults are the values every filter request uses unless a host
/// overrides them.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Color averaged into every pixel by the tint filter
    pub tint: Color,
    /// Side length of the pixelate block, in pixels
    pub pixel_size: u32,
    /// Channel offset for lighter/darker (0-255)
    pub lighten_step: u8,
    /// Contrast stretch factor around mid-gray
    pub contrast_factor: f64,
    /// Noise is drawn from `[-amplitude, amplitude)` per channel
    pub noise_amplitude: u8,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            tint: Color::new(255, 200, 200),
            pixel_size: 10,
            lighten_step: 30,
            contrast_factor: 1.8,
            noise_amplitude: 25,
        }
    }
}

impl FilterParams {
    /// Create parameters with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
