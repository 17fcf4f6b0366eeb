//! Neon Bounce entry point
//!
//! Headless stand-in for the panel demo: runs the simulation indefinitely
//! at the fixed tick rate and logs a one-line frame summary once a second.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use neon_bounce::consts::TICK_HZ;
use neon_bounce::{ConfigError, DisplayTarget, Sprite, TouchSource, World, WorldConfig};

/// Display backend that logs a frame summary at 1 Hz
struct LogDisplay {
    frames: u64,
}

impl DisplayTarget for LogDisplay {
    fn present(&mut self, frame: &[Sprite]) {
        self.frames += 1;
        if self.frames % TICK_HZ as u64 != 0 {
            return;
        }
        let summary: Vec<String> = frame
            .iter()
            .map(|s| format!("({:.0},{:.0}) d{} #{:06X}", s.pos.x, s.pos.y, s.size, s.color))
            .collect();
        log::info!("t={}s {}", self.frames / TICK_HZ as u64, summary.join("  "));
    }
}

/// The headless build has no digitizer; every sample reports no contact.
struct NoTouch;

impl TouchSource for NoTouch {
    fn sample(&mut self) -> Option<glam::Vec2> {
        None
    }
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let cfg = load_config();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut world = World::new(cfg, seed)?;
    let mut display = LogDisplay { frames: 0 };
    let mut touch = NoTouch;
    let frame_delay = Duration::from_secs(1) / TICK_HZ;

    log::info!("Neon Bounce running at {TICK_HZ} Hz");
    loop {
        world.tick(touch.sample());
        display.present(&world.frame());
        thread::sleep(frame_delay);
    }
}

/// Config from the JSON file named by `NEON_BOUNCE_CONFIG` when set,
/// defaults otherwise. A bad file falls back to defaults with a warning.
fn load_config() -> WorldConfig {
    let Ok(path) = std::env::var("NEON_BOUNCE_CONFIG") else {
        return WorldConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(cfg) => {
                log::info!("loaded config from {path}");
                cfg
            }
            Err(err) => {
                log::warn!("bad config in {path}: {err}; using defaults");
                WorldConfig::default()
            }
        },
        Err(err) => {
            log::warn!("cannot read {path}: {err}; using defaults");
            WorldConfig::default()
        }
    }
}
