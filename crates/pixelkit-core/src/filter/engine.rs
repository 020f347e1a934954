//! Region-gated pixel traversal.
//!
//! Every filter runs through [`apply_kernel`]: the kernel is evaluated for
//! pixels inside the region and the source color is copied everywhere else.
//! Kernels always read from the untouched source buffer, never from the
//! output under construction, so neighborhood kernels see the same input
//! regardless of traversal order or region.

use crate::buffer::{Color, PixelBuffer};
use crate::roi::Roi;

/// Produce a new buffer by applying `kernel` inside `roi`.
///
/// # Arguments
/// * `source` - Buffer to read from (never modified)
/// * `roi` - Region whose pixels receive the kernel output
/// * `kernel` - Called as `kernel(source, x, y)` for each pixel inside `roi`
///
/// # Returns
/// A buffer with the same dimensions as `source`. Pixels outside `roi` are
/// bit-identical to the source.
pub fn apply_kernel<K>(source: &PixelBuffer, roi: Roi, mut kernel: K) -> PixelBuffer
where
    K: FnMut(&PixelBuffer, u32, u32) -> Color,
{
    let (width, height) = source.dimensions();
    let mut pixels = Vec::with_capacity(source.as_bytes().len());

    for y in 0..height {
        for x in 0..width {
            let color = if roi.contains(x, y) {
                kernel(source, x, y)
            } else {
                source.get(x, y)
            };
            pixels.extend_from_slice(&color.channels());
        }
    }

    source.with_pixels(pixels)
}

/// Lift a per-color transform into the kernel signature.
#[inline]
pub fn pointwise(f: impl Fn(Color) -> Color) -> impl Fn(&PixelBuffer, u32, u32) -> Color {
    move |source, x, y| f(source.get(x, y))
}
