use anyhow::Result;
use image::RgbImage;
use log::debug;

use crate::compositor::OverlayCompositor;
use crate::config::AppConfig;
use crate::fps::FpsEstimator;
use crate::landmarks::draw_landmarks;
use crate::output::FrameSink;
use crate::style::Palette;
use crate::text::Typeface;
use crate::types::ServoAngles;

/// Draws the debug view for one window and hands it to a [`FrameSink`].
///
/// The caller's frame is never drawn on; every call works on a copy.
pub struct UiDebugger<S: FrameSink> {
    window_name: String,
    sink: S,
    compositor: OverlayCompositor,
    fps: FpsEstimator,
    landmark_radius: i32,
}

impl<S: FrameSink> UiDebugger<S> {
    pub fn new(window_name: impl Into<String>, sink: S) -> Self {
        Self::with_compositor(window_name, sink, OverlayCompositor::default(), 3)
    }

    pub fn with_compositor(
        window_name: impl Into<String>,
        sink: S,
        compositor: OverlayCompositor,
        landmark_radius: i32,
    ) -> Self {
        Self {
            window_name: window_name.into(),
            sink,
            compositor,
            fps: FpsEstimator::new(),
            landmark_radius,
        }
    }

    pub fn from_config(config: &AppConfig, sink: S) -> Self {
        let compositor = OverlayCompositor::new(
            config.panel.clone(),
            Palette::default(),
            Typeface::from_config(&config.ui),
        );
        Self::with_compositor(config.window.name.clone(), sink, compositor, config.ui.landmark_radius)
    }

    pub fn window_name(&self) -> &str {
        &self.window_name
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn fps(&self) -> f32 {
        self.fps.fps()
    }

    /// Copies `frame`, samples FPS and draws landmarks plus the panel.
    /// `None` when there is no frame; the estimator is not sampled then.
    pub fn compose(
        &mut self,
        frame: Option<&RgbImage>,
        gesture: &str,
        angles: &ServoAngles,
        landmarks: Option<&[Vec<f32>]>,
    ) -> Option<RgbImage> {
        let frame = frame?;
        let mut debug_frame = frame.clone();
        let fps = self.fps.sample();

        if let Some(points) = landmarks.filter(|l| !l.is_empty()) {
            let drawn = draw_landmarks(
                &mut debug_frame,
                points,
                self.landmark_radius,
                self.compositor.style(),
                self.compositor.palette(),
            );
            if drawn < points.len() {
                debug!("Drew {} of {} landmarks", drawn, points.len());
            }
        }

        self.compositor.render(&mut debug_frame, gesture, angles, fps);
        Some(debug_frame)
    }

    pub fn show(
        &mut self,
        frame: Option<&RgbImage>,
        gesture: &str,
        angles: &ServoAngles,
        landmarks: Option<&[Vec<f32>]>,
    ) -> Result<()> {
        match self.compose(frame, gesture, angles, landmarks) {
            Some(debug_frame) => self.sink.show(&self.window_name, &debug_frame),
            None => Ok(()),
        }
    }

    pub fn close(&mut self) -> Result<()> {
        self.sink.close(&self.window_name)
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Shows a single frame through a throwaway debugger. Its FPS reading only
/// covers the time since the debugger was built.
pub fn show_debug_window<S: FrameSink>(
    sink: S,
    frame: Option<&RgbImage>,
    gesture: &str,
    angles: &ServoAngles,
    landmarks: Option<&[Vec<f32>]>,
    window_name: &str,
) -> Result<S> {
    let mut debugger = UiDebugger::new(window_name, sink);
    debugger.show(frame, gesture, angles, landmarks)?;
    Ok(debugger.into_sink())
}
