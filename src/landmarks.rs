use image::RgbImage;
use log::debug;

use crate::draw::{blend, fill_circle};
use crate::style::{Palette, PanelStyle};
use crate::types::Landmark;

/// Neon landmark dots: a soft glow disc under a sharp core dot.
///
/// Glows go on one copy of the frame and cores on another; the glow layer is
/// blended in first at `glow_opacity`, then the core layer at `dot_opacity`.
/// Colors follow the input index, so a skipped entry still uses up its color.
/// Returns the number of landmarks drawn.
pub fn draw_landmarks(
    frame: &mut RgbImage,
    landmarks: &[Vec<f32>],
    radius: i32,
    style: &PanelStyle,
    palette: &Palette,
) -> usize {
    let mut glow_layer = frame.clone();
    let mut dot_layer = frame.clone();
    let mut drawn = 0;

    for (idx, raw) in landmarks.iter().enumerate() {
        let Some(Landmark { x, y }) = Landmark::from_coords(raw) else {
            debug!("Skipping malformed landmark #{}: {:?}", idx, raw);
            continue;
        };
        let color = palette.landmarks[idx % palette.landmarks.len()];

        fill_circle(&mut glow_layer, (x, y), radius * 4, color);
        fill_circle(&mut dot_layer, (x, y), radius + 1, color);
        drawn += 1;
    }

    blend(frame, &glow_layer, style.glow_opacity);
    blend(frame, &dot_layer, style.dot_opacity);
    drawn
}
