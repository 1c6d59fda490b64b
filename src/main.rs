use clap::Parser;
use colored::*;
use log::info;

use gesture_hud::background::cyberpunk_background;
use gesture_hud::config::AppConfig;
use gesture_hud::{MinifbDisplay, ServoAngles, UiDebugger};

mod args;

use args::Args;

const SERVOS: [(&str, f32); 4] = [
    ("Servo 1", 45.0),
    ("Servo 2", 90.0),
    ("Servo 3", 135.0),
    ("Servo 4", 60.0),
];

const LANDMARKS: [[f32; 2]; 5] = [
    [100.0, 100.0],
    [200.0, 150.0],
    [300.0, 200.0],
    [400.0, 250.0],
    [500.0, 300.0],
];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // 0. Load Config
    let mut config = if args.config == AppConfig::PATH {
        AppConfig::load()?
    } else {
        AppConfig::load_from(&args.config)?
    };
    if let Some(name) = args.window {
        config.window.name = name;
    }
    if let Some(w) = args.width {
        config.window.width = w;
    }
    if let Some(h) = args.height {
        config.window.height = h;
    }

    // 1. Synthetic frame in place of a camera
    let frame = cyberpunk_background(config.window.width, config.window.height);
    let landmarks: Vec<Vec<f32>> = LANDMARKS.iter().map(|p| p.to_vec()).collect();

    // 2. Debugger bound to one window
    let mut debugger = UiDebugger::from_config(&config, MinifbDisplay::new());
    println!(
        "{}",
        format!("Debug window '{}' ({}x{}). Press Q or Esc to quit.", config.window.name, frame.width(), frame.height()).green()
    );

    // 3. Loop
    let mut frame_count: u64 = 0;
    loop {
        // sweep each servo slowly around its base angle
        let t = frame_count as f32 * 0.05;
        let angles: ServoAngles = SERVOS
            .iter()
            .enumerate()
            .map(|(i, (name, base))| (*name, base + (t + i as f32).sin() * 15.0))
            .collect();

        debugger.show(Some(&frame), &args.gesture, &angles, Some(landmarks.as_slice()))?;
        frame_count += 1;

        let name = debugger.window_name().to_string();
        let display = debugger.sink();
        if !display.is_open(&name)
            || display.is_key_down(&name, minifb::Key::Q)
            || display.is_key_down(&name, minifb::Key::Escape)
        {
            break;
        }
        if args.frames > 0 && frame_count >= args.frames {
            break;
        }
    }

    info!("Rendered {} frames, last FPS {:.1}", frame_count, debugger.fps());
    debugger.close()?;
    Ok(())
}
