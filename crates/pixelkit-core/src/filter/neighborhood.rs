//! Kernels that sample surrounding pixels.
//!
//! All lookups use global image coordinates on the source buffer. Samples
//! that fall outside the image are skipped, so averages near the border are
//! taken over fewer pixels rather than padded with zeros.

use crate::buffer::{Color, PixelBuffer};

/// Sobel weights, indexed `[dx + 1][dy + 1]`.
const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Transposed Sobel weights, same indexing.
const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Running per-channel sum over in-bounds samples.
#[derive(Default)]
struct ChannelSum {
    r: u32,
    g: u32,
    b: u32,
    count: u32,
}

impl ChannelSum {
    fn add(&mut self, c: Color) {
        self.r += c.r as u32;
        self.g += c.g as u32;
        self.b += c.b as u32;
        self.count += 1;
    }

    /// Floored mean. The center pixel is always in bounds, so `count > 0`.
    fn mean(&self) -> Color {
        let n = self.count.max(1);
        Color::new((self.r / n) as u8, (self.g / n) as u8, (self.b / n) as u8)
    }
}

/// 3x3 box blur.
pub fn blur(source: &PixelBuffer, x: u32, y: u32) -> Color {
    let (cx, cy) = (x as i64, y as i64);
    let mut sum = ChannelSum::default();
    for dx in -1..=1 {
        for dy in -1..=1 {
            if let Some(c) = source.sample(cx + dx, cy + dy) {
                sum.add(c);
            }
        }
    }
    sum.mean()
}

/// Sobel edge magnitude per channel.
///
/// Output channel = `min(255, round(sqrt(gx^2 + gy^2)))`.
pub fn show_borders(source: &PixelBuffer, x: u32, y: u32) -> Color {
    let (cx, cy) = (x as i64, y as i64);
    let mut gx = [0i32; 3];
    let mut gy = [0i32; 3];

    for dx in -1i64..=1 {
        for dy in -1i64..=1 {
            let Some(c) = source.sample(cx + dx, cy + dy) else {
                continue;
            };
            let wx = SOBEL_X[(dx + 1) as usize][(dy + 1) as usize];
            let wy = SOBEL_Y[(dx + 1) as usize][(dy + 1) as usize];
            for (i, v) in c.channels().into_iter().enumerate() {
                gx[i] += wx * v as i32;
                gy[i] += wy * v as i32;
            }
        }
    }

    let magnitude = |i: usize| {
        let m = ((gx[i] * gx[i] + gy[i] * gy[i]) as f64).sqrt().round();
        m.min(255.0) as u8
    };
    Color::new(magnitude(0), magnitude(1), magnitude(2))
}

/// Average of the `block x block` square anchored at `(x, y)`.
///
/// The block extends right and down from the pixel, not around it, and is
/// clipped to the image before sampling.
pub fn pixelate(source: &PixelBuffer, x: u32, y: u32, block: u32) -> Color {
    let block = block.max(1);
    let x_end = x.saturating_add(block).min(source.width());
    let y_end = y.saturating_add(block).min(source.height());

    let mut sum = ChannelSum::default();
    for sy in y..y_end {
        for sx in x..x_end {
            sum.add(source.get(sx, sy));
        }
    }
    sum.mean()
}

/// Darken toward the corners in proportion to distance from the center.
pub fn vignette(source: &PixelBuffer, x: u32, y: u32) -> Color {
    let center_x = (source.width() / 2) as f64;
    let center_y = (source.height() / 2) as f64;
    let max_distance = (center_x * center_x + center_y * center_y).sqrt();

    let dx = center_x - x as f64;
    let dy = center_y - y as f64;
    let distance = (dx * dx + dy * dy).sqrt();

    // A 1x1 image has no distance to attenuate over
    let factor = if max_distance > 0.0 {
        (distance / max_distance).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let scale = |v: u8| (v as f64 * (1.0 - factor)) as i32;
    let c = source.get(x, y);
    Color::from_clamped(scale(c.r), scale(c.g), scale(c.b))
}

/// Horizontal flip: the color at the mirrored column.
pub fn mirror(source: &PixelBuffer, x: u32, y: u32) -> Color {
    source.get(source.width() - 1 - x, y)
}
