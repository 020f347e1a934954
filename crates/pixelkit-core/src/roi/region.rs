//! Resolving a point set into the region a filter may modify.

use serde::{Deserialize, Serialize};

use super::{PointSet, MAX_POINTS};
use crate::error::FilterError;

/// The area of the image a filter is allowed to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Roi {
    /// The full image.
    #[default]
    Unbounded,
    /// An axis-aligned rectangle, inclusive on every edge.
    Rect {
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
    },
}

impl Roi {
    /// Resolve the active region from a point set.
    ///
    /// - 0 points: [`Roi::Unbounded`]
    /// - 4 points: the rectangle spanning the normalized corners
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidRoi`] for 1-3 points.
    pub fn resolve(points: &PointSet) -> Result<Roi, FilterError> {
        match points.len() {
            0 => Ok(Roi::Unbounded),
            MAX_POINTS => {
                let pts = points.points();
                Ok(Roi::Rect {
                    min_x: pts.iter().map(|p| p.x).min().unwrap_or_default(),
                    min_y: pts.iter().map(|p| p.y).min().unwrap_or_default(),
                    max_x: pts.iter().map(|p| p.x).max().unwrap_or_default(),
                    max_y: pts.iter().map(|p| p.y).max().unwrap_or_default(),
                })
            }
            n => Err(FilterError::InvalidRoi { points: n }),
        }
    }

    /// Check if a pixel coordinate falls inside the region.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        match *self {
            Roi::Unbounded => true,
            Roi::Rect {
                min_x,
                min_y,
                max_x,
                max_y,
            } => {
                let (x, y) = (x as i64, y as i64);
                x >= min_x as i64 && x <= max_x as i64 && y >= min_y as i64 && y <= max_y as i64
            }
        }
    }
}
