use anyhow::Result;
use clap::Parser;
use crossbeam_channel::unbounded;
use env_logger::Env;
use log::{info, warn};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use playdeck::media::{MediaElement, MediaEvent};
use playdeck::surface::SurfaceEvent;
use playdeck::utils::Config;
use playdeck::{ConsoleSurface, PlayerController, SimMediaElement};

/// PlayDeck - a video player control surface driven against a simulated media engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Simulated media length in seconds
    #[arg(long, default_value = "90")]
    media_secs: f64,

    /// Volume restored by the first unmute (0-100)
    #[arg(short, long, default_value = "50")]
    volume: u8,

    /// Playback rate selected partway through the run
    #[arg(short, long, default_value = "1.5")]
    speed: f64,

    /// Simulated seconds advanced per tick
    #[arg(long, default_value = "1.0")]
    tick_secs: f64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Interaction script stages, keyed off playback position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Seek,
    Volume,
    Mute,
    Unmute,
    Speed,
    Fullscreen,
    ExitFullscreen,
    Done,
}

impl Stage {
    /// Fraction of the media at which this stage fires
    fn trigger(&self) -> f64 {
        match self {
            Stage::Seek => 0.10,
            Stage::Volume => 0.20,
            Stage::Mute => 0.30,
            Stage::Unmute => 0.40,
            Stage::Speed => 0.50,
            Stage::Fullscreen => 0.60,
            Stage::ExitFullscreen => 0.80,
            Stage::Done => f64::INFINITY,
        }
    }

    fn next(&self) -> Stage {
        match self {
            Stage::Seek => Stage::Volume,
            Stage::Volume => Stage::Mute,
            Stage::Mute => Stage::Unmute,
            Stage::Unmute => Stage::Speed,
            Stage::Speed => Stage::Fullscreen,
            Stage::Fullscreen => Stage::ExitFullscreen,
            Stage::ExitFullscreen => Stage::Done,
            Stage::Done => Stage::Done,
        }
    }

    /// The surface event this stage injects
    fn event(&self, args: &Args) -> Option<SurfaceEvent> {
        match self {
            // seek to 40% of a 640px progress track
            Stage::Seek => Some(SurfaceEvent::ProgressClick {
                offset_x: 256.0,
                track_width: 640.0,
            }),
            // 200px volume track, click at x=170
            Stage::Volume => Some(SurfaceEvent::VolumeClick {
                offset_x: 170.0,
                track_width: 200.0,
            }),
            Stage::Mute | Stage::Unmute => Some(SurfaceEvent::VolumeIcon),
            Stage::Speed => Some(SurfaceEvent::SpeedSelected { rate: args.speed }),
            Stage::Fullscreen | Stage::ExitFullscreen => Some(SurfaceEvent::FullscreenButton),
            Stage::Done => None,
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration; a broken config file falls back to defaults
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Config not loaded ({}), using defaults", e);
        Config::default()
    });

    // Initialize logging
    let log_level = if args.debug {
        "debug"
    } else {
        config.general.log_level.as_str()
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting PlayDeck v{}", env!("CARGO_PKG_VERSION"));
    info!("Speed presets: {:?}", config.player.speed_presets);

    let mut player_config = config.player.clone();
    player_config.default_volume = f64::from(args.volume) / 100.0;

    // Build the controller against the simulated engine and console surface
    let media = Arc::new(Mutex::new(SimMediaElement::new()));
    let surface = Arc::new(Mutex::new(ConsoleSurface::new(config.surface.bar_cells)));
    let mut controller =
        PlayerController::new(media.clone(), surface.clone(), &player_config)?;

    // Metadata arrives, then the user hits play
    let canplay = media.lock().load(args.media_secs);
    controller.handle_media_event(canplay)?;
    controller.handle_surface_event(SurfaceEvent::PlayButton)?;

    // Worker thread ticks the simulated clock and ships lifecycle events
    let (event_tx, event_rx) = unbounded();
    let ticker_media = media.clone();
    let tick_secs = args.tick_secs;
    let ticker = thread::spawn(move || loop {
        thread::sleep(Duration::from_millis(20));
        let events = ticker_media.lock().advance(tick_secs);
        let ended = events.contains(&MediaEvent::Ended);
        for event in events {
            if event_tx.send(event).is_err() {
                return;
            }
        }
        if ended {
            return;
        }
    });

    // Main loop: feed lifecycle events to the controller, inject the
    // scripted interactions as playback passes their trigger points
    let mut stage = Stage::Seek;
    for event in event_rx.iter() {
        let ended = event == MediaEvent::Ended;
        controller.handle_media_event(event)?;

        let position = {
            let m = media.lock();
            match m.duration() {
                Some(total) if total > 0.0 => m.current_time() / total,
                _ => 0.0,
            }
        };
        // at most one stage per tick, so a forward seek does not fire a
        // burst of interactions in the same instant
        if position >= stage.trigger() {
            if let Some(surface_event) = stage.event(&args) {
                controller.handle_surface_event(surface_event)?;
            }
            stage = stage.next();
        }

        if ended {
            break;
        }
    }

    if ticker.join().is_err() {
        warn!("Ticker thread panicked");
    }

    info!(
        "Run finished: fullscreen={}, restore volume {:.0}%",
        controller.is_fullscreen(),
        controller.restore_volume() * 100.0
    );

    Ok(())
}
