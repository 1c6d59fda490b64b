//! A tiny 3x5 bitmap font, used when no TrueType face is configured.
//! Lowercase is drawn as uppercase; unknown characters render as a block.

use image::{Rgb, RgbImage};

use crate::draw::plot;

pub const GLYPH_COLS: i32 = 3;
pub const GLYPH_ROWS: i32 = 5;

/// Horizontal advance per character: 3 columns plus 1 spacing, scaled
pub fn advance(scale: i32) -> i32 {
    (GLYPH_COLS + 1) * scale
}

pub fn measure_text_width(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * advance(scale)
}

pub fn text_height(scale: i32) -> i32 {
    GLYPH_ROWS * scale
}

/// Draws `text` with its top-left corner at (x, y).
pub fn draw_text_line(img: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>, scale: i32) {
    let mut cx = x;
    for c in text.chars() {
        draw_char(img, cx, y, c, color, scale);
        cx += advance(scale);
    }
}

fn glyph(c: char) -> [u8; 5] {
    // Rows top to bottom, bit 2 is the left column
    match c.to_ascii_uppercase() {
        '0' => [0x7, 0x5, 0x5, 0x5, 0x7],
        '1' => [0x2, 0x6, 0x2, 0x2, 0x7],
        '2' => [0x7, 0x1, 0x7, 0x4, 0x7],
        '3' => [0x7, 0x1, 0x7, 0x1, 0x7],
        '4' => [0x5, 0x5, 0x7, 0x1, 0x1],
        '5' => [0x7, 0x4, 0x7, 0x1, 0x7],
        '6' => [0x7, 0x4, 0x7, 0x5, 0x7],
        '7' => [0x7, 0x1, 0x2, 0x4, 0x4],
        '8' => [0x7, 0x5, 0x7, 0x5, 0x7],
        '9' => [0x7, 0x5, 0x7, 0x1, 0x7],
        'A' => [0x2, 0x5, 0x7, 0x5, 0x5],
        'B' => [0x6, 0x5, 0x6, 0x5, 0x6],
        'C' => [0x7, 0x4, 0x4, 0x4, 0x7],
        'D' => [0x6, 0x5, 0x5, 0x5, 0x6],
        'E' => [0x7, 0x4, 0x6, 0x4, 0x7],
        'F' => [0x7, 0x4, 0x6, 0x4, 0x4],
        'G' => [0x3, 0x4, 0x5, 0x5, 0x3],
        'H' => [0x5, 0x5, 0x7, 0x5, 0x5],
        'I' => [0x7, 0x2, 0x2, 0x2, 0x7],
        'J' => [0x1, 0x1, 0x1, 0x5, 0x2],
        'K' => [0x5, 0x5, 0x6, 0x5, 0x5],
        'L' => [0x4, 0x4, 0x4, 0x4, 0x7],
        'M' => [0x5, 0x7, 0x7, 0x5, 0x5],
        'N' => [0x6, 0x5, 0x5, 0x5, 0x5],
        'O' => [0x7, 0x5, 0x5, 0x5, 0x7],
        'P' => [0x7, 0x5, 0x7, 0x4, 0x4],
        'Q' => [0x2, 0x5, 0x5, 0x7, 0x3],
        'R' => [0x6, 0x5, 0x6, 0x5, 0x5],
        'S' => [0x3, 0x4, 0x2, 0x1, 0x6],
        'T' => [0x7, 0x2, 0x2, 0x2, 0x2],
        'U' => [0x5, 0x5, 0x5, 0x5, 0x7],
        'V' => [0x5, 0x5, 0x5, 0x5, 0x2],
        'W' => [0x5, 0x5, 0x7, 0x7, 0x5],
        'X' => [0x5, 0x5, 0x2, 0x5, 0x5],
        'Y' => [0x5, 0x5, 0x2, 0x2, 0x2],
        'Z' => [0x7, 0x1, 0x2, 0x4, 0x7],
        ' ' => [0x0, 0x0, 0x0, 0x0, 0x0],
        ':' => [0x0, 0x2, 0x0, 0x2, 0x0],
        '.' => [0x0, 0x0, 0x0, 0x0, 0x2],
        ',' => [0x0, 0x0, 0x0, 0x2, 0x4],
        '-' => [0x0, 0x0, 0x7, 0x0, 0x0],
        '+' => [0x0, 0x2, 0x7, 0x2, 0x0],
        '=' => [0x0, 0x7, 0x0, 0x7, 0x0],
        '_' => [0x0, 0x0, 0x0, 0x0, 0x7],
        '/' => [0x1, 0x1, 0x2, 0x4, 0x4],
        '%' => [0x5, 0x1, 0x2, 0x4, 0x5],
        '!' => [0x2, 0x2, 0x2, 0x0, 0x2],
        '?' => [0x7, 0x1, 0x2, 0x0, 0x2],
        '\'' => [0x2, 0x2, 0x0, 0x0, 0x0],
        '°' => [0x2, 0x5, 0x2, 0x0, 0x0],
        '(' => [0x2, 0x4, 0x4, 0x4, 0x2],
        ')' => [0x2, 0x1, 0x1, 0x1, 0x2],
        '[' => [0x7, 0x4, 0x4, 0x4, 0x7],
        ']' => [0x7, 0x1, 0x1, 0x1, 0x7],
        _ => [0x7, 0x7, 0x7, 0x7, 0x7],
    }
}

fn draw_char(img: &mut RgbImage, x: i32, y: i32, c: char, color: Rgb<u8>, scale: i32) {
    for (row, bits) in glyph(c).iter().enumerate() {
        for col in 0..GLYPH_COLS {
            if (bits >> (2 - col)) & 1 == 1 {
                for dy in 0..scale {
                    for dx in 0..scale {
                        plot(img, x + col * scale + dx, y + row as i32 * scale + dy, color);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_chars_not_bytes() {
        assert_eq!(measure_text_width("45.0°", 2), 5 * 8);
        assert_eq!(measure_text_width("", 3), 0);
    }

    #[test]
    fn lowercase_matches_uppercase() {
        let mut upper = RgbImage::new(40, 10);
        let mut lower = RgbImage::new(40, 10);
        draw_text_line(&mut upper, 0, 0, "THUMBS", Rgb([255, 255, 255]), 1);
        draw_text_line(&mut lower, 0, 0, "thumbs", Rgb([255, 255, 255]), 1);
        assert_eq!(upper, lower);
    }

    #[test]
    fn space_draws_nothing() {
        let mut img = RgbImage::new(10, 10);
        draw_text_line(&mut img, 0, 0, "  ", Rgb([255, 255, 255]), 2);
        assert!(img.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }
}
