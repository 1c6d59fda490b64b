//! The information card: gesture, servo angles and FPS in a translucent,
//! bracket-framed box in the top-left corner of the frame.

use image::RgbImage;

use crate::draw::{blend, draw_line, fill_circle, fill_rect, stroke_circle, stroke_rect};
use crate::style::{Palette, PanelStyle};
use crate::text::Typeface;
use crate::types::{PanelBox, PanelLine, ServoAngles};

const PLACEHOLDER: &str = "NONE";

pub struct OverlayCompositor {
    style: PanelStyle,
    palette: Palette,
    typeface: Typeface,
}

impl Default for OverlayCompositor {
    fn default() -> Self {
        Self::new(PanelStyle::default(), Palette::default(), Typeface::default())
    }
}

impl OverlayCompositor {
    pub fn new(style: PanelStyle, palette: Palette, typeface: Typeface) -> Self {
        Self { style, palette, typeface }
    }

    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Gesture first, then the angle block (or a single placeholder), then FPS.
    pub fn build_lines(&self, gesture: &str, angles: &ServoAngles, fps: f32) -> Vec<PanelLine> {
        let gesture = if gesture.is_empty() { PLACEHOLDER } else { gesture };
        let mut lines = vec![PanelLine::new("GESTURE", gesture, self.palette.gesture)];

        if angles.is_empty() {
            lines.push(PanelLine::new("SERVO ANGLES", PLACEHOLDER, self.palette.header));
        } else {
            lines.push(PanelLine::new("SERVO ANGLES", "", self.palette.header));
            for (idx, (name, angle)) in angles.iter().enumerate() {
                let color = if idx % 2 == 0 {
                    self.palette.angle_even
                } else {
                    self.palette.angle_odd
                };
                lines.push(PanelLine::new(format!("  {}", name), format!("{:.1}°", angle), color));
            }
        }

        lines.push(PanelLine::new("FPS", format!("{:.1}", fps), self.palette.fps));
        lines
    }

    pub fn layout(&self, lines: &[PanelLine]) -> PanelBox {
        let s = &self.style;
        let max_width = lines
            .iter()
            .map(|l| self.typeface.measure_width(&l.text()))
            .max()
            .unwrap_or(0);

        let width = max_width + s.padding * 2 + s.extra_margin;
        let height = s.padding * 2 + s.line_height * lines.len() as i32 + s.bottom_margin;

        PanelBox {
            left: s.origin_x,
            top: s.origin_y,
            right: s.origin_x + width,
            bottom: s.origin_y + height,
        }
    }

    /// Draws the panel onto `image` in place and hands the same buffer back.
    pub fn render<'a>(
        &self,
        image: &'a mut RgbImage,
        gesture: &str,
        angles: &ServoAngles,
        fps: f32,
    ) -> &'a mut RgbImage {
        let lines = self.build_lines(gesture, angles, fps);
        let panel = self.layout(&lines);

        self.draw_card(image, &panel);
        self.draw_brackets(image, &panel);
        self.draw_border(image, &panel);
        self.draw_separators(image, &panel, lines.len());
        self.draw_corner_dots(image, &panel);
        self.draw_text(image, &lines);
        self.draw_scan_line(image, &panel);

        image
    }

    fn draw_card(&self, image: &mut RgbImage, panel: &PanelBox) {
        let mut card = image.clone();
        fill_rect(
            &mut card,
            (panel.left, panel.top),
            (panel.right, panel.bottom),
            self.palette.card,
        );
        blend(image, &card, self.style.card_opacity);
    }

    fn draw_brackets(&self, image: &mut RgbImage, panel: &PanelBox) {
        let len = self.style.corner_length;
        let thickness = self.style.bracket_thickness;
        let color = self.palette.bracket;
        // (corner, direction towards the box interior)
        let corners = [
            ((panel.left, panel.top), (1, 1)),
            ((panel.right, panel.top), (-1, 1)),
            ((panel.left, panel.bottom), (1, -1)),
            ((panel.right, panel.bottom), (-1, -1)),
        ];
        for ((x, y), (dx, dy)) in corners {
            draw_line(image, (x, y), (x + dx * len, y), color, thickness);
            draw_line(image, (x, y), (x, y + dy * len), color, thickness);
        }
    }

    fn draw_border(&self, image: &mut RgbImage, panel: &PanelBox) {
        let m = self.style.inner_margin;
        stroke_rect(
            image,
            (panel.left + m, panel.top + m),
            (panel.right - m, panel.bottom - m),
            self.palette.border,
        );
    }

    fn draw_separators(&self, image: &mut RgbImage, panel: &PanelBox, line_count: usize) {
        let s = &self.style;
        let mut y = panel.top + s.padding + s.line_height;
        for _ in 1..line_count {
            y += s.line_height;
            draw_line(
                image,
                (panel.left + s.separator_inset, y),
                (panel.right - s.separator_inset, y),
                self.palette.separator,
                1,
            );
        }
    }

    fn draw_corner_dots(&self, image: &mut RgbImage, panel: &PanelBox) {
        for pt in panel.corners() {
            fill_circle(image, pt, self.style.corner_dot_radius, self.palette.bracket);
            stroke_circle(image, pt, self.style.corner_ring_radius, self.palette.bracket);
        }
    }

    fn draw_text(&self, image: &mut RgbImage, lines: &[PanelLine]) {
        let s = &self.style;
        let x = s.origin_x + s.padding;
        let mut baseline = s.origin_y + s.padding + s.line_height - s.text_baseline_lift;
        for line in lines {
            let text = line.display_text();
            self.typeface.draw(image, x + 1, baseline + 1, &text, self.palette.shadow);
            self.typeface.draw(image, x, baseline, &text, line.color);
            baseline += s.line_height;
        }
    }

    fn draw_scan_line(&self, image: &mut RgbImage, panel: &PanelBox) {
        let offset = self.style.scan_line_offset;
        let y = panel.top + offset;
        if y < panel.bottom {
            draw_line(
                image,
                (panel.left + offset, y),
                (panel.right - offset, y),
                self.palette.scan_line,
                1,
            );
        }
    }
}
