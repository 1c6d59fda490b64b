use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::draw::{draw_line, fill_circle, stroke_circle};

const GRID_SPACING: usize = 40;
const GRID_COLOR: Rgb<u8> = Rgb([200, 100, 255]);
const PARTICLE_COUNT: usize = 15;
const PARTICLE_COLORS: [Rgb<u8>; 3] = [
    Rgb([100, 200, 255]), // cyan
    Rgb([255, 100, 200]), // magenta
    Rgb([200, 255, 100]), // lime
];
const SCANLINE_COLOR: Rgb<u8> = Rgb([5, 0, 0]);

/// Synthetic stand-in for a camera frame: dark gradient, neon grid,
/// a few glowing particles and faint scanlines.
pub fn cyberpunk_background(width: u32, height: u32) -> RgbImage {
    cyberpunk_background_with(width, height, &mut StdRng::from_entropy())
}

pub fn cyberpunk_background_seeded(width: u32, height: u32, seed: u64) -> RgbImage {
    cyberpunk_background_with(width, height, &mut StdRng::seed_from_u64(seed))
}

fn cyberpunk_background_with<R: Rng>(width: u32, height: u32, rng: &mut R) -> RgbImage {
    let mut frame = RgbImage::from_fn(width, height, |_, y| {
        let ratio = y as f32 / height as f32;
        Rgb([
            (10.0 + ratio * 30.0) as u8,
            (5.0 + ratio * 20.0) as u8,
            (20.0 + ratio * 50.0) as u8,
        ])
    });
    if width == 0 || height == 0 {
        return frame;
    }

    let (w, h) = (width as i32, height as i32);
    for x in (0..w).step_by(GRID_SPACING) {
        draw_line(&mut frame, (x, 0), (x, h), GRID_COLOR, 1);
    }
    for y in (0..h).step_by(GRID_SPACING) {
        draw_line(&mut frame, (0, y), (w, y), GRID_COLOR, 1);
    }

    for _ in 0..PARTICLE_COUNT {
        let x = rng.gen_range(0..w);
        let y = rng.gen_range(0..h);
        let color = *PARTICLE_COLORS.choose(rng).unwrap_or(&GRID_COLOR);
        fill_circle(&mut frame, (x, y), 2, color);
        stroke_circle(&mut frame, (x, y), 5, color);
    }

    for y in (0..h).step_by(6) {
        draw_line(&mut frame, (0, y), (w, y), SCANLINE_COLOR, 1);
    }

    frame
}
