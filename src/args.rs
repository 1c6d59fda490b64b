use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON configuration (created with defaults if missing)
    #[arg(short, long, default_value = "config.json")]
    pub config: String,

    /// Window name, overrides the configuration
    #[arg(short, long)]
    pub window: Option<String>,

    /// Frame width, overrides the configuration
    #[arg(long)]
    pub width: Option<u32>,

    /// Frame height, overrides the configuration
    #[arg(long)]
    pub height: Option<u32>,

    /// Gesture label shown in the panel
    #[arg(short, long, default_value = "Thumbs Up")]
    pub gesture: String,

    /// Stop after this many frames (0 runs until the window is closed)
    #[arg(long, default_value_t = 0)]
    pub frames: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_overrides_parse() {
        let args = Args::parse_from(["gesture-hud"]);
        assert_eq!(args.config, "config.json");
        assert_eq!(args.gesture, "Thumbs Up");
        assert_eq!(args.frames, 0);
        assert!(args.window.is_none());

        let args = Args::parse_from(["gesture-hud", "--window", "Arm", "--width", "800", "--frames", "10"]);
        assert_eq!(args.window.as_deref(), Some("Arm"));
        assert_eq!(args.width, Some(800));
        assert_eq!(args.frames, 10);
    }
}
