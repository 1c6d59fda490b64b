use anyhow::{anyhow, Result};
use image::RgbImage;
use log::{debug, info};
use std::collections::HashMap;

/// Where composed frames go, addressed by window name
pub trait FrameSink {
    fn show(&mut self, window: &str, frame: &RgbImage) -> Result<()>;
    fn close(&mut self, window: &str) -> Result<()>;
}

pub struct WindowOutput {
    window: minifb::Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl WindowOutput {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = minifb::Window::new(
            title,
            width,
            height,
            minifb::WindowOptions {
                resize: true,
                ..minifb::WindowOptions::default()
            },
        )
        .map_err(|e| anyhow!("Failed to create window: {}", e))?;

        window.set_target_fps(60);

        Ok(Self {
            window,
            buffer: vec![0; width * height],
            width,
            height,
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn is_key_down(&self, key: minifb::Key) -> bool {
        self.window.is_key_down(key)
    }

    pub fn update(&mut self, frame: &RgbImage) -> Result<()> {
        let (w, h) = (frame.width() as usize, frame.height() as usize);
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
        }
        self.buffer.clear();
        self.buffer.extend(frame.pixels().map(|p| {
            let [r, g, b] = p.0;
            ((r as u32) << 16) | ((g as u32) << 8) | b as u32
        }));

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| anyhow!("Window update failed: {}", e))
    }
}

/// One `minifb` window per name, opened on first use at the frame's size.
#[derive(Default)]
pub struct MinifbDisplay {
    windows: HashMap<String, WindowOutput>,
}

impl MinifbDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, window: &str) -> bool {
        self.windows.get(window).is_some_and(WindowOutput::is_open)
    }

    pub fn is_key_down(&self, window: &str, key: minifb::Key) -> bool {
        self.windows.get(window).is_some_and(|w| w.is_key_down(key))
    }
}

impl FrameSink for MinifbDisplay {
    fn show(&mut self, window: &str, frame: &RgbImage) -> Result<()> {
        if let Some(out) = self.windows.get_mut(window) {
            return out.update(frame);
        }
        let mut out = WindowOutput::new(window, frame.width() as usize, frame.height() as usize)?;
        info!("Opened window '{}' ({}x{})", window, frame.width(), frame.height());
        out.update(frame)?;
        self.windows.insert(window.to_string(), out);
        Ok(())
    }

    fn close(&mut self, window: &str) -> Result<()> {
        if self.windows.remove(window).is_some() {
            debug!("Closed window '{}'", window);
        }
        Ok(())
    }
}
