//! Point placement and removal.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::FilterError;

/// Number of points that define a rectangular region.
pub const MAX_POINTS: usize = 4;

/// Points closer than this to a removal query are deleted.
pub const REMOVAL_RADIUS: f64 = 15.0;

/// An integer coordinate in buffer space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to an arbitrary coordinate.
    #[inline]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x as f64 - x;
        let dy = self.y as f64 - y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An ordered collection of up to four points.
///
/// Owned by the caller and passed by reference into the filter engine,
/// which clears it after a successful application.
///
/// Serialized as a plain list of points. Deserializing replays the list
/// through [`PointSet::add`], so a complete set comes back normalized and
/// lists longer than [`MAX_POINTS`] are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Create an empty point set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check if the set holds a full rectangle selection.
    pub fn is_complete(&self) -> bool {
        self.points.len() == MAX_POINTS
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Append a point.
    ///
    /// Returns `false` without changing anything if the set is already full.
    /// Adding the fourth point normalizes the set into rectangle corners.
    pub fn add(&mut self, x: i32, y: i32) -> bool {
        if self.points.len() >= MAX_POINTS {
            trace!(x, y, "point set full, ignoring point");
            return false;
        }

        self.points.push(Point::new(x, y));
        trace!(x, y, count = self.points.len(), "point added");

        if self.points.len() == MAX_POINTS {
            self.normalize();
        }
        true
    }

    /// Remove every point strictly closer than [`REMOVAL_RADIUS`] to `(x, y)`.
    ///
    /// Returns the number of points removed. This may leave 1-3 points,
    /// which is an incomplete selection until cleared or completed.
    pub fn remove_near(&mut self, x: f64, y: f64) -> usize {
        let before = self.points.len();
        self.points.retain(|p| p.distance_to(x, y) >= REMOVAL_RADIUS);
        let removed = before - self.points.len();
        trace!(x, y, removed, "points removed");
        removed
    }

    /// Drop all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Replace the four raw clicks with the corners of their bounding box.
    fn normalize(&mut self) {
        let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
        let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        self.points = vec![
            Point::new(min_x, min_y),
            Point::new(min_x, max_y),
            Point::new(max_x, min_y),
            Point::new(max_x, max_y),
        ];
        // Stable, so a zero-width rectangle keeps top before bottom
        self.points.sort_by_key(|p| p.x);
    }
}

impl TryFrom<Vec<Point>> for PointSet {
    type Error = FilterError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        if points.len() > MAX_POINTS {
            return Err(FilterError::TooManyPoints {
                points: points.len(),
            });
        }

        let mut set = PointSet::new();
        for p in points {
            set.add(p.x, p.y);
        }
        Ok(set)
    }
}

impl From<PointSet> for Vec<Point> {
    fn from(set: PointSet) -> Self {
        set.points
    }
}
