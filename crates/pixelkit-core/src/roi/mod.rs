//! Region of interest selection.
//!
//! A region is chosen by placing four points on the image. Once the fourth
//! point lands, the set is normalized into the corners of the axis-aligned
//! rectangle spanning all four clicks. An empty set means "whole image";
//! anything in between is an incomplete selection and blocks filtering.
//!
//! ## Corner Order
//!
//! After normalization the points are stored as:
//! 0. top-left `(min_x, min_y)`
//! 1. bottom-left `(min_x, max_y)`
//! 2. top-right `(max_x, min_y)`
//! 3. bottom-right `(max_x, max_y)`
//!
//! The selection is one-shot: [`crate::filter::apply_filter`] clears the set
//! after every successful application.

mod points;
mod region;

pub use points::{Point, PointSet, MAX_POINTS, REMOVAL_RADIUS};
pub use region::Roi;
