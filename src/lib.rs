//! Debug overlay for a gesture-to-servo pipeline: landmark dots, the
//! recognised gesture, commanded servo angles and an FPS readout drawn onto
//! a copy of each frame.

pub mod background;
pub mod compositor;
pub mod config;
pub mod debugger;
pub mod draw;
pub mod font;
pub mod fps;
pub mod landmarks;
pub mod output;
pub mod style;
pub mod text;
pub mod ttf;
pub mod types;

pub use compositor::OverlayCompositor;
pub use debugger::{show_debug_window, UiDebugger};
pub use fps::FpsEstimator;
pub use output::{FrameSink, MinifbDisplay};
pub use types::{Landmark, PanelBox, PanelLine, ServoAngles};
