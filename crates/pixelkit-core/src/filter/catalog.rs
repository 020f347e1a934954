//! The fixed set of filters and their dispatch to kernels.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::engine::{apply_kernel, pointwise};
use super::{neighborhood as nb, pointwise as pw};
use crate::buffer::PixelBuffer;
use crate::error::FilterError;
use crate::roi::Roi;
use crate::FilterParams;

/// How a filter reads the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterShape {
    /// Output depends only on the pixel's own color.
    Pointwise,
    /// Output samples surrounding pixels.
    Neighborhood,
    /// Several filters run back to back.
    Composite,
}

/// Every available filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    AddNoise,
    Blur,
    ColorShiftLeft,
    ColorShiftRight,
    Contrast,
    Darker,
    EliminateBlue,
    EliminateGreen,
    EliminateRed,
    Grayscale,
    Lighter,
    Mirror,
    Negative,
    Pixelate,
    Posterize,
    Sepia,
    ShowBorders,
    Solarize,
    Threshold,
    Tint,
    Vintage,
    Vignette,
}

impl FilterKind {
    /// All filters, in menu order.
    pub const ALL: [FilterKind; 22] = [
        FilterKind::AddNoise,
        FilterKind::Blur,
        FilterKind::ColorShiftLeft,
        FilterKind::ColorShiftRight,
        FilterKind::Contrast,
        FilterKind::Darker,
        FilterKind::EliminateBlue,
        FilterKind::EliminateGreen,
        FilterKind::EliminateRed,
        FilterKind::Grayscale,
        FilterKind::Lighter,
        FilterKind::Mirror,
        FilterKind::Negative,
        FilterKind::Pixelate,
        FilterKind::Posterize,
        FilterKind::Sepia,
        FilterKind::ShowBorders,
        FilterKind::Solarize,
        FilterKind::Threshold,
        FilterKind::Tint,
        FilterKind::Vintage,
        FilterKind::Vignette,
    ];

    /// Display label. [`FromStr`] accepts exactly these strings.
    pub fn label(self) -> &'static str {
        match self {
            FilterKind::AddNoise => "Add Noise Filter",
            FilterKind::Blur => "Blur Filter",
            FilterKind::ColorShiftLeft => "Color Shift Left Filter",
            FilterKind::ColorShiftRight => "Color Shift Right Filter",
            FilterKind::Contrast => "Contrast Filter",
            FilterKind::Darker => "Darker Filter",
            FilterKind::EliminateBlue => "Eliminate Blue Filter",
            FilterKind::EliminateGreen => "Eliminate Green Filter",
            FilterKind::EliminateRed => "Eliminate Red Filter",
            FilterKind::Grayscale => "Grayscale Filter",
            FilterKind::Lighter => "Lighter Filter",
            FilterKind::Mirror => "Mirror Filter",
            FilterKind::Negative => "Negative Filter",
            FilterKind::Pixelate => "Pixelate Filter",
            FilterKind::Posterize => "Posterize Filter",
            FilterKind::Sepia => "Sepia Filter",
            FilterKind::ShowBorders => "Show Borders Filter",
            FilterKind::Solarize => "Solarize Filter",
            FilterKind::Threshold => "Threshold Filter",
            FilterKind::Tint => "Tint Filter",
            FilterKind::Vintage => "Vintage Filter",
            FilterKind::Vignette => "Vignette Filter",
        }
    }

    pub fn shape(self) -> FilterShape {
        match self {
            FilterKind::Blur
            | FilterKind::Mirror
            | FilterKind::Pixelate
            | FilterKind::ShowBorders
            | FilterKind::Vignette => FilterShape::Neighborhood,
            FilterKind::Vintage => FilterShape::Composite,
            _ => FilterShape::Pointwise,
        }
    }

    /// Whether identical inputs always give identical outputs.
    ///
    /// Noise-based filters depend on the random source as well.
    pub fn is_deterministic(self) -> bool {
        !matches!(self, FilterKind::AddNoise | FilterKind::Vintage)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}

/// Run one filter over `roi` without touching any point set.
pub(crate) fn render<R: Rng>(
    kind: FilterKind,
    source: &PixelBuffer,
    roi: Roi,
    params: &FilterParams,
    rng: &mut R,
) -> PixelBuffer {
    match kind {
        FilterKind::AddNoise => apply_kernel(source, roi, |s, x, y| {
            pw::add_noise(s.get(x, y), params.noise_amplitude, &mut *rng)
        }),
        FilterKind::Blur => apply_kernel(source, roi, nb::blur),
        FilterKind::ColorShiftLeft => apply_kernel(source, roi, pointwise(pw::shift_left)),
        FilterKind::ColorShiftRight => apply_kernel(source, roi, pointwise(pw::shift_right)),
        FilterKind::Contrast => apply_kernel(
            source,
            roi,
            pointwise(|c| pw::contrast(c, params.contrast_factor)),
        ),
        FilterKind::Darker => apply_kernel(
            source,
            roi,
            pointwise(|c| pw::darken(c, params.lighten_step)),
        ),
        FilterKind::EliminateBlue => apply_kernel(source, roi, pointwise(pw::eliminate_blue)),
        FilterKind::EliminateGreen => apply_kernel(source, roi, pointwise(pw::eliminate_green)),
        FilterKind::EliminateRed => apply_kernel(source, roi, pointwise(pw::eliminate_red)),
        FilterKind::Grayscale => apply_kernel(source, roi, pointwise(pw::grayscale)),
        FilterKind::Lighter => apply_kernel(
            source,
            roi,
            pointwise(|c| pw::lighten(c, params.lighten_step)),
        ),
        FilterKind::Mirror => apply_kernel(source, roi, nb::mirror),
        FilterKind::Negative => apply_kernel(source, roi, pointwise(pw::negative)),
        FilterKind::Pixelate => apply_kernel(source, roi, |s, x, y| {
            nb::pixelate(s, x, y, params.pixel_size)
        }),
        FilterKind::Posterize => apply_kernel(source, roi, pointwise(pw::posterize)),
        FilterKind::Sepia => apply_kernel(source, roi, pointwise(pw::sepia)),
        FilterKind::ShowBorders => apply_kernel(source, roi, nb::show_borders),
        FilterKind::Solarize => apply_kernel(source, roi, pointwise(pw::solarize)),
        FilterKind::Threshold => apply_kernel(source, roi, pointwise(pw::threshold)),
        FilterKind::Tint => apply_kernel(source, roi, pointwise(|c| pw::tint(c, params.tint))),
        FilterKind::Vintage => {
            // Sepia first, then noise over the same region of the toned image
            let toned = render(FilterKind::Sepia, source, roi, params, rng);
            render(FilterKind::AddNoise, &toned, roi, params, rng)
        }
        FilterKind::Vignette => apply_kernel(source, roi, nb::vignette),
    }
}
