//! Filter application.
//!
//! A filter request runs in three steps:
//! 1. Resolve the region from the caller's point set ([`Roi::resolve`])
//! 2. Dispatch the [`FilterKind`] to its kernel and traverse the image
//!    ([`engine::apply_kernel`]), writing kernel output inside the region
//!    and copying the source outside it
//! 3. Clear the point set, so the next filter needs a fresh selection
//!
//! ## Kernels
//!
//! - [`pointwise`] - per-color transforms (grayscale, sepia, noise, ...)
//! - [`neighborhood`] - kernels that sample nearby pixels (blur, edges,
//!   pixelate, vignette, mirror)
//!
//! Vintage is the one composite: sepia over the region, then noise over the
//! same region of the sepia result.

mod catalog;
pub mod engine;
pub mod neighborhood;
pub mod pointwise;

pub use catalog::{FilterKind, FilterShape};
pub use engine::apply_kernel;

use rand::Rng;
use tracing::{debug, warn};

use crate::buffer::PixelBuffer;
use crate::error::FilterError;
use crate::roi::{PointSet, Roi};
use crate::FilterParams;

/// Apply a filter to `source`, restricted by the caller's point set.
///
/// # Arguments
/// * `source` - Image to filter (never modified)
/// * `kind` - Which filter to run
/// * `points` - Current selection; cleared on success
/// * `params` - Filter parameters (tint color, block size, ...)
/// * `rng` - Random source for noise-based filters
///
/// # Errors
///
/// Returns [`FilterError::InvalidRoi`] if the point set holds 1-3 points.
/// In that case nothing is computed and `points` is left as it was.
pub fn apply_filter<R: Rng>(
    source: &PixelBuffer,
    kind: FilterKind,
    points: &mut PointSet,
    params: &FilterParams,
    rng: &mut R,
) -> Result<PixelBuffer, FilterError> {
    let roi = Roi::resolve(points).inspect_err(|_| {
        warn!(filter = %kind, points = points.len(), "rejecting filter: incomplete selection");
    })?;

    let output = apply_filter_in(source, kind, roi, params, rng);
    points.clear();
    Ok(output)
}

/// Apply a filter inside an already resolved region.
///
/// The returned buffer has the same dimensions as `source`; pixels outside
/// `roi` are copied unchanged.
pub fn apply_filter_in<R: Rng>(
    source: &PixelBuffer,
    kind: FilterKind,
    roi: Roi,
    params: &FilterParams,
    rng: &mut R,
) -> PixelBuffer {
    let (width, height) = source.dimensions();
    debug!(filter = %kind, ?roi, width, height, "applying filter");
    catalog::render(kind, source, roi, params, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Color;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| {
            Color::new((x * 37 % 256) as u8, (y * 53 % 256) as u8, ((x + y) * 11 % 256) as u8)
        })
        .unwrap()
    }

    fn rect_points(x0: i32, y0: i32, x1: i32, y1: i32) -> PointSet {
        let mut points = PointSet::new();
        points.add(x0, y0);
        points.add(x1, y0);
        points.add(x0, y1);
        points.add(x1, y1);
        points
    }

    fn run(source: &PixelBuffer, kind: FilterKind, points: &mut PointSet) -> Result<PixelBuffer, FilterError> {
        let mut rng = StdRng::seed_from_u64(7);
        apply_filter(source, kind, points, &FilterParams::default(), &mut rng)
    }

    #[test]
    fn test_grayscale_whole_image() {
        let src = PixelBuffer::filled(3, 3, Color::new(255, 0, 0)).unwrap();
        let mut points = PointSet::new();
        let out = run(&src, FilterKind::Grayscale, &mut points).unwrap();
        assert!(out.as_bytes().iter().all(|&b| b == 85));
    }

    #[test]
    fn test_partial_selection_rejected() {
        let src = gradient(8, 8);
        let original = src.clone();
        let mut points = PointSet::new();
        points.add(1, 1);
        points.add(5, 5);
        let before = points.clone();

        let err = run(&src, FilterKind::Negative, &mut points).unwrap_err();

        assert_eq!(err, FilterError::InvalidRoi { points: 2 });
        assert_eq!(points, before, "point set must be left alone");
        assert_eq!(src, original);
    }

    #[test]
    fn test_points_cleared_after_success() {
        let src = gradient(8, 8);

        let mut points = rect_points(1, 1, 4, 4);
        run(&src, FilterKind::Blur, &mut points).unwrap();
        assert!(points.is_empty());

        let mut points = PointSet::new();
        run(&src, FilterKind::Blur, &mut points).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_every_filter_keeps_dimensions() {
        let src = gradient(7, 5);
        for kind in FilterKind::ALL {
            let mut points = PointSet::new();
            let out = run(&src, kind, &mut points).unwrap();
            assert_eq!(out.dimensions(), (7, 5), "{kind} changed dimensions");
        }
    }

    #[test]
    fn test_every_filter_respects_rect() {
        let src = gradient(12, 10);
        let (x0, y0, x1, y1) = (3, 2, 7, 6);
        for kind in FilterKind::ALL {
            let mut points = rect_points(x0, y0, x1, y1);
            let out = run(&src, kind, &mut points).unwrap();
            for y in 0..10 {
                for x in 0..12 {
                    let inside = (x0..=x1).contains(&(x as i32)) && (y0..=y1).contains(&(y as i32));
                    if !inside {
                        assert_eq!(out.get(x, y), src.get(x, y), "{kind} touched ({x}, {y})");
                    }
                }
            }
        }
    }

    #[test]
    fn test_neighborhood_samples_outside_rect() {
        // Blur at the rect edge must see the pixels just outside it
        let src = PixelBuffer::from_fn(5, 1, |x, _| if x == 0 { Color::WHITE } else { Color::BLACK })
            .unwrap();
        let mut points = rect_points(1, 0, 1, 0);
        let out = run(&src, FilterKind::Blur, &mut points).unwrap();
        // (255 + 0 + 0) / 3
        assert_eq!(out.get(1, 0), Color::new(85, 85, 85));
        assert_eq!(out.get(0, 0), Color::WHITE);
    }

    #[test]
    fn test_mirror_whole_image() {
        let src = gradient(5, 3);
        let mut points = PointSet::new();
        let out = run(&src, FilterKind::Mirror, &mut points).unwrap();
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(out.get(x, y), src.get(4 - x, y));
            }
        }
    }

    #[test]
    fn test_mirror_inside_rect_only() {
        let src = gradient(6, 2);
        let mut points = rect_points(0, 0, 1, 1);
        let out = run(&src, FilterKind::Mirror, &mut points).unwrap();
        assert_eq!(out.get(0, 0), src.get(5, 0));
        assert_eq!(out.get(1, 1), src.get(4, 1));
        assert_eq!(out.get(5, 0), src.get(5, 0));
    }

    #[test]
    fn test_deterministic_filters_repeatable() {
        let src = gradient(9, 9);
        for kind in FilterKind::ALL.into_iter().filter(|k| k.is_deterministic()) {
            let a = run(&src, kind, &mut PointSet::new()).unwrap();
            let b = run(&src, kind, &mut PointSet::new()).unwrap();
            assert_eq!(a, b, "{kind} should be deterministic");
        }
    }

    #[test]
    fn test_seeded_noise_repeatable() {
        let src = gradient(9, 9);
        let a = run(&src, FilterKind::AddNoise, &mut PointSet::new()).unwrap();
        let b = run(&src, FilterKind::AddNoise, &mut PointSet::new()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_vintage_is_sepia_then_noise() {
        let src = gradient(6, 6);
        let params = FilterParams::default();
        let roi = Roi::Rect {
            min_x: 1,
            min_y: 1,
            max_x: 4,
            max_y: 4,
        };

        let mut rng = StdRng::seed_from_u64(99);
        let vintage = apply_filter_in(&src, FilterKind::Vintage, roi, &params, &mut rng);

        let mut rng = StdRng::seed_from_u64(99);
        let toned = apply_filter_in(&src, FilterKind::Sepia, roi, &params, &mut rng);
        let expected = apply_filter_in(&toned, FilterKind::AddNoise, roi, &params, &mut rng);

        assert_eq!(vintage, expected);
        assert_eq!(vintage.get(0, 0), src.get(0, 0));
    }

    #[test]
    fn test_vintage_consumes_points_once() {
        let src = gradient(6, 6);
        let mut points = rect_points(0, 0, 2, 2);
        run(&src, FilterKind::Vintage, &mut points).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_pixelate_uses_block_param() {
        let src = gradient(4, 4);
        let mut params = FilterParams::default();
        params.pixel_size = 1;
        let mut rng = StdRng::seed_from_u64(0);
        let out = apply_filter_in(&src, FilterKind::Pixelate, Roi::Unbounded, &params, &mut rng);
        assert_eq!(out, src, "1x1 blocks leave the image unchanged");
    }

    #[test]
    fn test_pixelate_block_larger_than_image() {
        let src = PixelBuffer::filled(5, 4, Color::new(60, 70, 80)).unwrap();
        let mut params = FilterParams::default();
        params.pixel_size = u32::MAX;
        let mut rng = StdRng::seed_from_u64(0);
        let out = apply_filter_in(&src, FilterKind::Pixelate, Roi::Unbounded, &params, &mut rng);
        assert_eq!(out, src);
    }

    proptest! {
        #[test]
        fn prop_negative_involutive(
            w in 1u32..12,
            h in 1u32..12,
            seed: u64,
        ) {
            let src = PixelBuffer::from_fn(w, h, |x, y| {
                let v = seed.wrapping_mul(31).wrapping_add((x * 7 + y * 13) as u64);
                Color::new(v as u8, (v >> 8) as u8, (v >> 16) as u8)
            }).unwrap();
            let once = run(&src, FilterKind::Negative, &mut PointSet::new()).unwrap();
            let twice = run(&once, FilterKind::Negative, &mut PointSet::new()).unwrap();
            prop_assert_eq!(twice, src);
        }

        #[test]
        fn prop_mirror_involutive(w in 1u32..12, h in 1u32..12) {
            let src = gradient(w, h);
            let once = run(&src, FilterKind::Mirror, &mut PointSet::new()).unwrap();
            let twice = run(&once, FilterKind::Mirror, &mut PointSet::new()).unwrap();
            prop_assert_eq!(twice, src);
        }

        #[test]
        fn prop_outside_rect_untouched(
            kind_idx in 0usize..22,
            corners in prop::array::uniform4((0i32..10, 0i32..10)),
        ) {
            let kind = FilterKind::ALL[kind_idx];
            let src = gradient(10, 10);
            let mut points = PointSet::new();
            for (x, y) in corners {
                points.add(x, y);
            }
            let roi = Roi::resolve(&points).unwrap();
            let out = run(&src, kind, &mut points).unwrap();
            for y in 0..10 {
                for x in 0..10 {
                    if !roi.contains(x, y) {
                        prop_assert_eq!(out.get(x, y), src.get(x, y));
                    }
                }
            }
        }
    }
}
