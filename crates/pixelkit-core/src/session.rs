//! Editing session: the caller-side state around the filter engine.
//!
//! An [`EditSession`] owns the loaded image, the latest filtered result and
//! the selection points. Filters always run on the originally loaded image,
//! so applying one filter after another replaces the previous result rather
//! than stacking on it, and reverting costs nothing.

use rand::Rng;
use tracing::{debug, trace};

use crate::buffer::PixelBuffer;
use crate::error::FilterError;
use crate::filter::{apply_filter, FilterKind};
use crate::roi::PointSet;
use crate::FilterParams;

/// Loaded image, filtered result and selection for one editing context.
#[derive(Debug, Clone)]
pub struct EditSession<R> {
    original: Option<PixelBuffer>,
    current: Option<PixelBuffer>,
    points: PointSet,
    params: FilterParams,
    rng: R,
}

impl<R: Rng> EditSession<R> {
    /// Create an empty session using `rng` for noise-based filters.
    pub fn new(rng: R) -> Self {
        Self::with_params(rng, FilterParams::default())
    }

    pub fn with_params(rng: R, params: FilterParams) -> Self {
        Self {
            original: None,
            current: None,
            points: PointSet::new(),
            params,
            rng,
        }
    }

    /// Load an image, replacing any previous one and clearing the selection.
    pub fn load(&mut self, image: PixelBuffer) {
        debug!(width = image.width(), height = image.height(), "session image loaded");
        self.current = Some(image.clone());
        self.original = Some(image);
        self.points.clear();
    }

    /// Place a selection point.
    ///
    /// Ignored (returns `false`) if no image is loaded or four points are
    /// already placed.
    pub fn add_point(&mut self, x: i32, y: i32) -> bool {
        if self.original.is_none() {
            trace!(x, y, "no image loaded, ignoring point");
            return false;
        }
        self.points.add(x, y)
    }

    /// Remove all points near `(x, y)`. Returns how many were removed.
    pub fn remove_point(&mut self, x: f64, y: f64) -> usize {
        self.points.remove_near(x, y)
    }

    /// Drop the current selection.
    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    /// Apply a filter to the loaded image within the current selection.
    ///
    /// On success the result becomes the current image and the selection
    /// is cleared.
    ///
    /// # Errors
    ///
    /// - [`FilterError::NoImageLoaded`] if nothing has been loaded
    /// - [`FilterError::InvalidRoi`] if 1-3 points are placed
    pub fn apply(&mut self, kind: FilterKind) -> Result<&PixelBuffer, FilterError> {
        let original = self.original.as_ref().ok_or(FilterError::NoImageLoaded)?;
        let filtered = apply_filter(original, kind, &mut self.points, &self.params, &mut self.rng)?;
        Ok(self.current.insert(filtered))
    }

    /// Restore the current image to the loaded original.
    pub fn revert(&mut self) {
        self.current.clone_from(&self.original);
    }

    pub fn original(&self) -> Option<&PixelBuffer> {
        self.original.as_ref()
    }

    /// The latest filtered image, or the original if nothing has been applied.
    pub fn current(&self) -> Option<&PixelBuffer> {
        self.current.as_ref()
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    /// Replace the parameters used by later [`apply`](Self::apply) calls.
    pub fn set_params(&mut self, params: FilterParams) {
        self.params = params;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Color;
    use crate::roi::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> EditSession<StdRng> {
        EditSession::new(StdRng::seed_from_u64(3))
    }

    fn red_image() -> PixelBuffer {
        PixelBuffer::filled(20, 20, Color::new(255, 0, 0)).unwrap()
    }

    #[test]
    fn test_points_ignored_without_image() {
        let mut s = session();
        assert!(!s.add_point(5, 5));
        assert!(s.points().is_empty());
    }

    #[test]
    fn test_apply_without_image() {
        let mut s = session();
        assert_eq!(s.apply(FilterKind::Blur).unwrap_err(), FilterError::NoImageLoaded);
    }

    #[test]
    fn test_apply_whole_image() {
        let mut s = session();
        s.load(red_image());
        let out = s.apply(FilterKind::Grayscale).unwrap();
        assert_eq!(out.get(10, 10), Color::new(85, 85, 85));
        assert_eq!(s.original().unwrap().get(10, 10), Color::new(255, 0, 0));
    }

    #[test]
    fn test_apply_selection_then_consumed() {
        let mut s = session();
        s.load(red_image());
        for (x, y) in [(2, 2), (5, 2), (2, 5), (5, 5)] {
            assert!(s.add_point(x, y));
        }
        assert!(!s.add_point(9, 9), "fifth point must be ignored");

        let out = s.apply(FilterKind::Negative).unwrap().clone();
        assert_eq!(out.get(3, 3), Color::new(0, 255, 255));
        assert_eq!(out.get(6, 6), Color::new(255, 0, 0));
        assert!(s.points().is_empty());

        // Next filter applies to the whole image again
        let out = s.apply(FilterKind::Negative).unwrap();
        assert_eq!(out.get(6, 6), Color::new(0, 255, 255));
    }

    #[test]
    fn test_incomplete_selection_keeps_state() {
        let mut s = session();
        s.load(red_image());
        s.add_point(1, 1);
        s.add_point(8, 8);

        assert_eq!(
            s.apply(FilterKind::Sepia).unwrap_err(),
            FilterError::InvalidRoi { points: 2 }
        );
        assert_eq!(s.points().points(), &[Point::new(1, 1), Point::new(8, 8)]);
        assert_eq!(s.current(), s.original());
    }

    #[test]
    fn test_remove_point_then_apply() {
        let mut s = session();
        s.load(red_image());
        s.add_point(3, 3);
        assert_eq!(s.remove_point(4.0, 4.0), 1);
        assert!(s.apply(FilterKind::Tint).is_ok());
    }

    #[test]
    fn test_filters_do_not_stack() {
        let mut s = session();
        s.load(red_image());
        s.apply(FilterKind::Darker).unwrap();
        let out = s.apply(FilterKind::Darker).unwrap();
        assert_eq!(out.get(0, 0), Color::new(225, 0, 0));
    }

    #[test]
    fn test_revert() {
        let mut s = session();
        s.load(red_image());
        s.apply(FilterKind::Negative).unwrap();
        assert_ne!(s.current(), s.original());

        s.revert();
        assert_eq!(s.current(), s.original());
    }

    #[test]
    fn test_load_clears_points() {
        let mut s = session();
        s.load(red_image());
        s.add_point(1, 1);
        s.load(red_image());
        assert!(s.points().is_empty());
    }

    #[test]
    fn test_set_params_affects_next_apply() {
        let mut s = session();
        s.load(PixelBuffer::filled(2, 2, Color::new(100, 100, 100)).unwrap());
        let mut params = FilterParams::default();
        params.lighten_step = 5;
        s.set_params(params);

        let out = s.apply(FilterKind::Lighter).unwrap();
        assert_eq!(out.get(1, 1), Color::new(105, 105, 105));
        assert_eq!(s.params().lighten_step, 5);
    }

    #[test]
    fn test_custom_params() {
        let mut params = FilterParams::default();
        params.tint = Color::new(255, 255, 255);
        let mut s = EditSession::with_params(StdRng::seed_from_u64(0), params);
        s.load(PixelBuffer::filled(2, 2, Color::BLACK).unwrap());
        let out = s.apply(FilterKind::Tint).unwrap();
        assert_eq!(out.get(0, 0), Color::new(127, 127, 127));
    }
}
