use image::{Rgb, RgbImage};

use crate::config::UiConfig;
use crate::font;
use crate::ttf::FontRenderer;

/// The one typeface the panel is measured and drawn with.
pub enum Typeface {
    Bitmap { scale: i32 },
    TrueType { renderer: FontRenderer, size_pt: f32 },
}

impl Default for Typeface {
    fn default() -> Self {
        Typeface::Bitmap { scale: 3 }
    }
}

impl Typeface {
    /// TrueType when `font_family` is set and loads, bitmap otherwise
    pub fn from_config(ui: &UiConfig) -> Self {
        let bitmap = Typeface::Bitmap { scale: ui.bitmap_scale.max(1) };
        if ui.font_family.is_empty() {
            return bitmap;
        }
        match FontRenderer::try_load(&ui.font_family) {
            Some(renderer) => Typeface::TrueType {
                renderer,
                size_pt: ui.font_size_pt as f32,
            },
            None => bitmap,
        }
    }

    pub fn measure_width(&self, text: &str) -> i32 {
        match self {
            Typeface::Bitmap { scale } => font::measure_text_width(text, *scale),
            Typeface::TrueType { renderer, size_pt } => renderer.measure_width(text, *size_pt),
        }
    }

    /// Draws `text` starting at `x` with its baseline on `baseline`.
    pub fn draw(&self, img: &mut RgbImage, x: i32, baseline: i32, text: &str, color: Rgb<u8>) {
        match self {
            Typeface::Bitmap { scale } => {
                let top = baseline - font::text_height(*scale);
                font::draw_text_line(img, x, top, text, color, *scale);
            }
            Typeface::TrueType { renderer, size_pt } => {
                renderer.draw_text(img, x, baseline, text, color, *size_pt)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_family_selects_bitmap() {
        let ui = UiConfig {
            font_family: String::new(),
            bitmap_scale: 2,
            ..UiConfig::default()
        };
        let face = Typeface::from_config(&ui);
        assert!(matches!(face, Typeface::Bitmap { scale: 2 }));
        assert_eq!(face.measure_width("FPS: 30.0"), 9 * 8);
    }

    #[test]
    fn bitmap_text_sits_on_baseline() {
        let face = Typeface::Bitmap { scale: 1 };
        let mut img = RgbImage::new(10, 20);
        face.draw(&mut img, 0, 10, "I", WHITE_TEST);
        // rows 5..=9 hold the glyph, the baseline row itself stays clear
        assert_eq!(*img.get_pixel(0, 5), WHITE_TEST);
        assert_eq!(*img.get_pixel(1, 9), WHITE_TEST);
        assert!((0..10).all(|x| *img.get_pixel(x, 10) == Rgb([0, 0, 0])));
        assert!((0..10).all(|x| *img.get_pixel(x, 4) == Rgb([0, 0, 0])));
    }

    const WHITE_TEST: Rgb<u8> = Rgb([255, 255, 255]);
}
