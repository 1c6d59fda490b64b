//! Raster primitives on RGB8 frames.
//!
//! Everything clips silently at the frame edges, so callers can pass
//! coordinates that fall partly or wholly outside the image.

use image::{Rgb, RgbImage};

#[inline]
pub fn plot(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

pub fn fill_circle(img: &mut RgbImage, center: (i32, i32), radius: i32, color: Rgb<u8>) {
    let (cx, cy) = center;
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                plot(img, cx + dx, cy + dy, color);
            }
        }
    }
}

/// One pixel wide ring
pub fn stroke_circle(img: &mut RgbImage, center: (i32, i32), radius: i32, color: Rgb<u8>) {
    let (cx, cy) = center;
    let outer = (radius as f32 + 0.5).powi(2);
    let inner = (radius as f32 - 0.5).max(0.0).powi(2);
    for dy in -(radius + 1)..=(radius + 1) {
        for dx in -(radius + 1)..=(radius + 1) {
            let d2 = (dx * dx + dy * dy) as f32;
            if d2 >= inner && d2 <= outer {
                plot(img, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Bresenham line; thicker lines stamp a square brush on each step.
pub fn draw_line(
    img: &mut RgbImage,
    from: (i32, i32),
    to: (i32, i32),
    color: Rgb<u8>,
    thickness: i32,
) {
    let thickness = thickness.max(1);
    let lo = -(thickness - 1) / 2;
    let hi = lo + thickness;

    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        for oy in lo..hi {
            for ox in lo..hi {
                plot(img, x + ox, y + oy, color);
            }
        }
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Filled rectangle, both corners inclusive
pub fn fill_rect(img: &mut RgbImage, top_left: (i32, i32), bottom_right: (i32, i32), color: Rgb<u8>) {
    let (x0, x1) = (top_left.0.min(bottom_right.0), top_left.0.max(bottom_right.0));
    let (y0, y1) = (top_left.1.min(bottom_right.1), top_left.1.max(bottom_right.1));
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(img.width() as i32 - 1);
    let y1 = y1.min(img.height() as i32 - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// One pixel outline, both corners inclusive
pub fn stroke_rect(img: &mut RgbImage, top_left: (i32, i32), bottom_right: (i32, i32), color: Rgb<u8>) {
    let (l, t) = top_left;
    let (r, b) = bottom_right;
    draw_line(img, (l, t), (r, t), color, 1);
    draw_line(img, (r, t), (r, b), color, 1);
    draw_line(img, (r, b), (l, b), color, 1);
    draw_line(img, (l, b), (l, t), color, 1);
}

/// `frame = layer * alpha + frame * (1 - alpha)`, per channel, rounded.
///
/// Layers are copies of the frame they are blended onto, so sizes always match.
pub fn blend(frame: &mut RgbImage, layer: &RgbImage, alpha: f32) {
    debug_assert_eq!(frame.dimensions(), layer.dimensions());
    let alpha = alpha.clamp(0.0, 1.0);
    let beta = 1.0 - alpha;
    for (dst, src) in frame.iter_mut().zip(layer.iter()) {
        let v = *src as f32 * alpha + *dst as f32 * beta;
        *dst = v.round().clamp(0.0, 255.0) as u8;
    }
}
