use anyhow::Result;
use image::{Rgb, RgbImage};

use gesture_hud::background::cyberpunk_background_seeded;
use gesture_hud::config::AppConfig;
use gesture_hud::{FrameSink, OverlayCompositor, PanelLine, ServoAngles, UiDebugger};

#[derive(Default)]
struct Recorder {
    shown: Vec<(String, RgbImage)>,
    closed: Vec<String>,
}

impl FrameSink for Recorder {
    fn show(&mut self, window: &str, frame: &RgbImage) -> Result<()> {
        self.shown.push((window.to_string(), frame.clone()));
        Ok(())
    }

    fn close(&mut self, window: &str) -> Result<()> {
        self.closed.push(window.to_string());
        Ok(())
    }
}

#[test]
fn demo_session_renders_and_closes() {
    let frame = cyberpunk_background_seeded(640, 480, 42);
    let pristine = frame.clone();
    let landmarks: Vec<Vec<f32>> = vec![
        vec![100.0, 100.0],
        vec![200.0, 150.0],
        vec![300.0],
        vec![400.0, 250.0],
    ];
    let angles: ServoAngles = [("Servo 1", 45.0), ("Servo 2", 90.0), ("Servo 3", 135.0)]
        .into_iter()
        .collect();

    let mut debugger = UiDebugger::new("Test Debug Window", Recorder::default());
    for _ in 0..3 {
        debugger
            .show(Some(&frame), "Thumbs Up", &angles, Some(landmarks.as_slice()))
            .unwrap();
    }
    debugger.show(None, "Thumbs Up", &angles, None).unwrap();
    debugger.close().unwrap();

    assert_eq!(frame, pristine);
    assert!(debugger.fps() > 0.0);

    let sink = debugger.into_sink();
    assert_eq!(sink.shown.len(), 3);
    assert!(sink.shown.iter().all(|(name, img)| name == "Test Debug Window" && img.dimensions() == (640, 480)));
    assert_eq!(sink.closed, vec!["Test Debug Window".to_string()]);
}

#[test]
fn compositor_matches_default_debugger_output() {
    // With a fixed fps the compositor alone is deterministic
    let comp = OverlayCompositor::default();
    let angles: ServoAngles = [("Servo 1", 45.0), ("Servo 2", 90.0)].into_iter().collect();

    let lines = comp.build_lines("Thumbs Up", &angles, 30.0);
    let drawn: Vec<String> = lines.iter().map(PanelLine::display_text).collect();
    assert_eq!(
        drawn,
        vec!["GESTURE: Thumbs Up", "SERVO ANGLES:", "  Servo 1: 45.0°", "  Servo 2: 90.0°", "FPS: 30.0"]
    );

    let mut a = RgbImage::from_pixel(400, 300, Rgb([10, 20, 30]));
    let mut b = a.clone();
    comp.render(&mut a, "Thumbs Up", &angles, 30.0);
    comp.render(&mut b, "Thumbs Up", &angles, 30.0);
    assert_eq!(a, b);
}

#[test]
fn config_drives_window_name_and_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "window": { "name": "Arm HUD" }, "ui": { "bitmap_scale": 2 }, "panel": { "origin_x": 5, "origin_y": 5 } }"#,
    )
    .unwrap();
    let config = AppConfig::load_from(&path).unwrap();

    let frame = RgbImage::from_pixel(320, 240, Rgb([255, 255, 255]));
    let mut debugger = UiDebugger::from_config(&config, Recorder::default());
    debugger.show(Some(&frame), "", &ServoAngles::new(), None).unwrap();

    let sink = debugger.into_sink();
    let (name, shown) = &sink.shown[0];
    assert_eq!(name, "Arm HUD");
    // the top-left corner dot moved with the origin
    assert_eq!(*shown.get_pixel(5, 5), Rgb([0, 255, 255]));
    assert_eq!(*shown.get_pixel(20, 5), Rgb([0, 255, 255]));
}
