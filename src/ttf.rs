use image::{Rgb, RgbImage};
use log::{info, warn};
use rusttype::{point, Font, Scale};
use std::fs;
use std::path::Path;

use crate::draw::plot;

pub struct FontRenderer {
    font: Font<'static>,
}

impl FontRenderer {
    /// Looks `family` up in the usual system font directories, then the
    /// working directory. A value ending in `.ttf` is tried as a path first.
    pub fn try_load(family: &str) -> Option<Self> {
        let mut paths = Vec::new();
        if family.ends_with(".ttf") {
            paths.push(family.to_string());
        }
        paths.extend([
            format!("/Library/Fonts/{}.ttf", family),
            format!("/System/Library/Fonts/{}.ttf", family),
            format!("/System/Library/Fonts/Supplemental/{}.ttf", family),
            format!("/usr/share/fonts/truetype/{}.ttf", family),
            format!("/usr/share/fonts/truetype/dejavu/{}.ttf", family),
            format!("{}.ttf", family),
        ]);

        for p in paths.iter() {
            if Path::new(p).exists() {
                if let Ok(data) = fs::read(p) {
                    if let Some(font) = Font::try_from_vec(data) {
                        info!("Loaded font from {}", p);
                        return Some(Self { font });
                    }
                }
            }
        }

        warn!("Could not find font family '{}'. Falling back to bitmap.", family);
        None
    }

    /// Draws `text` with its baseline at `baseline`, blending by glyph coverage.
    pub fn draw_text(&self, img: &mut RgbImage, x: i32, baseline: i32, text: &str, color: Rgb<u8>, size_pt: f32) {
        let scale = Scale::uniform(size_pt);
        let start = point(x as f32, baseline as f32);

        for glyph in self.font.layout(text, scale, start) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    if v <= 0.0 {
                        return;
                    }
                    let px = bb.min.x + gx as i32;
                    let py = bb.min.y + gy as i32;
                    if px < 0 || py < 0 || px as u32 >= img.width() || py as u32 >= img.height() {
                        return;
                    }
                    let under = *img.get_pixel(px as u32, py as u32);
                    let mut out = [0u8; 3];
                    for c in 0..3 {
                        let mixed = color.0[c] as f32 * v + under.0[c] as f32 * (1.0 - v);
                        out[c] = mixed.round().clamp(0.0, 255.0) as u8;
                    }
                    plot(img, px, py, Rgb(out));
                });
            }
        }
    }

    /// Advance width of the laid-out string, in pixels
    pub fn measure_width(&self, text: &str, size_pt: f32) -> i32 {
        let scale = Scale::uniform(size_pt);
        self.font
            .layout(text, scale, point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
            .ceil() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_family_falls_back() {
        assert!(FontRenderer::try_load("definitely-not-a-real-font-family").is_none());
    }
}
