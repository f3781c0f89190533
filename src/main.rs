//! Motionlight main entry point
//!
//! Hosted simulation: a single-threaded polling loop around the hexagonal
//! core on the in-memory board.  The register adapter (`adapters::mmio`)
//! is for bare-metal images and is not driven from this binary.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  SimBoard                  LogEventSink      StdClock        │
//! │  (Input+Output+Timer+      (EventSink)       (Clock)         │
//! │   Display)                                                   │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ─────────────────       │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │          LightController (pure logic)              │      │
//! │  │  Input · Sensitivity · Motion · AutoOff · Alert    │      │
//! │  └────────────────────────────────────────────────────┘      │
//! │                                                              │
//! │  stdin feeder ──▶ sample queue ──▶ loop (host simulation)    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use log::info;

use motionlight::adapters::log_sink::LogEventSink;
use motionlight::app::service::LightController;
use motionlight::config::SystemConfig;

/// Environment variable naming a JSON configuration file.
const CONFIG_ENV: &str = "MOTIONLIGHT_CONFIG";

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Motionlight v{} starting (simulation)", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = load_config()?;
    info!(
        "Config: sensitivity={} cooldown={}us ({:?}) auto_off={}ms",
        config.initial_sensitivity, config.cooldown_us, config.cooldown_scope, config.auto_off_ms
    );

    // ── 3. Run ────────────────────────────────────────────────
    run(&config)
}

fn load_config() -> Result<SystemConfig> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        info!("{} not set, using defaults", CONFIG_ENV);
        return Ok(SystemConfig::default());
    };
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config file {}", path))?;
    let config = SystemConfig::from_json(&json)
        .with_context(|| format!("loading config file {}", path))?;
    info!("Loaded config from {}", path);
    Ok(config)
}

/// Host simulation: register snapshots arrive as `"<buttons> <switches>"`
/// lines on stdin and are fed to the loop through the sample queue.
fn run(config: &SystemConfig) -> Result<()> {
    use std::io::BufRead;
    use std::time::Duration;

    use log::warn;

    use motionlight::adapters::sim::SimBoard;
    use motionlight::adapters::time::StdClock;
    use motionlight::events::{self, InputSample};

    std::thread::Builder::new()
        .name("stdin-feed".into())
        .spawn(|| {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match InputSample::parse(&line) {
                    Some(sample) => {
                        if !events::push_sample(sample) {
                            warn!("sample queue full, dropped {:?}", sample);
                        }
                    }
                    None => warn!("ignoring input line {:?} (want \"<buttons> <switches>\")", line),
                }
            }
            info!("stdin closed, inputs frozen at last sample");
        })
        .context("spawning stdin feeder")?;

    let clock = StdClock::new();
    let mut board = SimBoard::new(config, clock);
    let mut sink = LogEventSink::new();
    let mut controller = LightController::new(config);
    controller.start(&mut board, &mut sink);

    let pacing = Duration::from_millis(u64::from(config.poll_interval_ms));
    info!("Entering polling loop ({:?} per cycle)", pacing);
    loop {
        if let Some(sample) = events::pop_sample() {
            board.set_inputs(sample.buttons, sample.switches);
        }
        controller.tick(&mut board, &clock, &mut sink);
        std::thread::sleep(pacing);
    }
}
