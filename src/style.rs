use image::Rgb;
use serde::{Deserialize, Serialize};

pub const CYAN: Rgb<u8> = Rgb([0, 255, 255]);
pub const MAGENTA: Rgb<u8> = Rgb([255, 0, 255]);
pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 100, 255]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const CARD: Rgb<u8> = Rgb([15, 5, 5]);
pub const SHADOW: Rgb<u8> = Rgb([0, 0, 0]);

/// Landmark colors, cycled by landmark index
pub const NEON_PALETTE: [Rgb<u8>; 5] = [
    Rgb([255, 105, 180]), // pink
    Rgb([120, 195, 255]), // peach
    Rgb([255, 160, 220]), // violet
    Rgb([200, 255, 130]), // mint
    Rgb([180, 255, 255]), // pale cyan
];

/// Pixel geometry and opacities of the panel and landmark layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelStyle {
    pub origin_x: i32,
    pub origin_y: i32,
    pub padding: i32,
    pub line_height: i32,
    /// Added to the widest line on top of the padding
    pub extra_margin: i32,
    pub bottom_margin: i32,
    pub corner_length: i32,
    pub bracket_thickness: i32,
    pub inner_margin: i32,
    pub separator_inset: i32,
    pub corner_dot_radius: i32,
    pub corner_ring_radius: i32,
    /// Baseline of the first line sits this far above `top + padding + line_height`
    pub text_baseline_lift: i32,
    pub scan_line_offset: i32,
    pub card_opacity: f32,
    pub glow_opacity: f32,
    pub dot_opacity: f32,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            origin_x: 20,
            origin_y: 20,
            padding: 18,
            line_height: 26,
            extra_margin: 40,
            bottom_margin: 10,
            corner_length: 25,
            bracket_thickness: 2,
            inner_margin: 3,
            separator_inset: 10,
            corner_dot_radius: 3,
            corner_ring_radius: 6,
            text_baseline_lift: 4,
            scan_line_offset: 5,
            card_opacity: 0.75,
            glow_opacity: 0.25,
            dot_opacity: 0.90,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub gesture: Rgb<u8>,
    pub header: Rgb<u8>,
    pub angle_even: Rgb<u8>,
    pub angle_odd: Rgb<u8>,
    pub fps: Rgb<u8>,
    pub card: Rgb<u8>,
    pub bracket: Rgb<u8>,
    pub border: Rgb<u8>,
    pub separator: Rgb<u8>,
    pub scan_line: Rgb<u8>,
    pub shadow: Rgb<u8>,
    pub landmarks: [Rgb<u8>; 5],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            gesture: CYAN,
            header: WHITE,
            angle_even: GREEN,
            angle_odd: MAGENTA,
            fps: BLUE,
            card: CARD,
            bracket: CYAN,
            border: MAGENTA,
            separator: BLUE,
            scan_line: GREEN,
            shadow: SHADOW,
            landmarks: NEON_PALETTE,
        }
    }
}
