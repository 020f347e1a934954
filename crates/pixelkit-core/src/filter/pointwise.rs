//! Per-pixel color transforms.
//!
//! Each function maps one input color to one output color and ignores the
//! pixel's neighbors. Integer arithmetic floors; float results truncate
//! toward zero before the channel clamp.

use rand::Rng;

use crate::buffer::Color;

/// Luma threshold shared by threshold and solarize.
pub const MIDPOINT: i32 = 128;

/// Posterize band width.
const POSTERIZE_STEP: u8 = 64;

#[inline]
fn average(c: Color) -> u8 {
    ((c.r as u16 + c.g as u16 + c.b as u16) / 3) as u8
}

/// Each channel becomes the mean of the three.
pub fn grayscale(c: Color) -> Color {
    let v = average(c);
    Color::new(v, v, v)
}

/// White if the channel mean exceeds 128, black otherwise.
pub fn threshold(c: Color) -> Color {
    if average(c) as i32 > MIDPOINT {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// Quantize each channel to a multiple of 64.
pub fn posterize(c: Color) -> Color {
    c.map(|v| (v / POSTERIZE_STEP) * POSTERIZE_STEP)
}

/// Average each channel with the tint color.
pub fn tint(c: Color, tint: Color) -> Color {
    let mix = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;
    Color::new(mix(c.r, tint.r), mix(c.g, tint.g), mix(c.b, tint.b))
}

/// (R, G, B) -> (B, R, G)
pub fn shift_right(c: Color) -> Color {
    Color::new(c.b, c.r, c.g)
}

/// (R, G, B) -> (G, B, R)
pub fn shift_left(c: Color) -> Color {
    Color::new(c.g, c.b, c.r)
}

pub fn eliminate_red(c: Color) -> Color {
    Color::new(0, c.g, c.b)
}

pub fn eliminate_green(c: Color) -> Color {
    Color::new(c.r, 0, c.b)
}

pub fn eliminate_blue(c: Color) -> Color {
    Color::new(c.r, c.g, 0)
}

/// Classic sepia tone matrix.
pub fn sepia(c: Color) -> Color {
    let (r, g, b) = (c.r as f64, c.g as f64, c.b as f64);
    let tr = 0.393 * r + 0.769 * g + 0.189 * b;
    let tg = 0.349 * r + 0.686 * g + 0.168 * b;
    let tb = 0.272 * r + 0.534 * g + 0.131 * b;
    Color::from_clamped(tr as i32, tg as i32, tb as i32)
}

/// Add `step` to each channel, saturating at 255.
pub fn lighten(c: Color, step: u8) -> Color {
    c.map(|v| v.saturating_add(step))
}

/// Subtract `step` from each channel, saturating at 0.
pub fn darken(c: Color, step: u8) -> Color {
    c.map(|v| v.saturating_sub(step))
}

pub fn negative(c: Color) -> Color {
    c.map(|v| 255 - v)
}

/// Stretch each channel away from mid-gray.
///
/// Formula: `((v - 128) / 128 * factor) * 128 + 128`
pub fn contrast(c: Color, factor: f64) -> Color {
    let adjust = |v: u8| {
        let normalized = (v as f64 - 128.0) / 128.0;
        ((normalized * factor) * 128.0 + 128.0) as i32
    };
    Color::from_clamped(adjust(c.r), adjust(c.g), adjust(c.b))
}

/// Invert channels brighter than 128.
pub fn solarize(c: Color) -> Color {
    c.map(|v| if v as i32 > MIDPOINT { 255 - v } else { v })
}

/// Offset each channel by an independent draw from `[-amplitude, amplitude)`.
pub fn add_noise<R: Rng>(c: Color, amplitude: u8, rng: &mut R) -> Color {
    if amplitude == 0 {
        return c;
    }
    let span = amplitude as i32;
    let mut jitter = |v: u8| v as i32 + rng.random_range(-span..span);
    let r = jitter(c.r);
    let g = jitter(c.g);
    let b = jitter(c.b);
    Color::from_clamped(r, g, b)
}
