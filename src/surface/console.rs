//! Console rendering of the control surface for PlayDeck
//!
//! Renders the widget set as log lines: fill bars become cell strings,
//! glyph swaps and fullscreen transitions are logged as they happen. Used
//! by the demo binary; per-tick updates stay at debug level so a normal
//! run is not drowned in progress lines.

use crate::player::display::percent_string;
use crate::player::{PlaybackGlyph, VolumeGlyph};
use crate::surface::ControlSurface;
use crate::utils::error::Result;
use log::{debug, info};

/// Log-backed control surface
#[derive(Debug)]
pub struct ConsoleSurface {
    /// Resolution of the rendered fill bars, in cells
    bar_cells: usize,

    /// Current play control glyph
    play_glyph: PlaybackGlyph,

    /// Current volume control glyph
    volume_glyph: VolumeGlyph,

    /// Played fraction last written to the progress fill
    progress_fraction: f64,

    /// Volume fraction last written to the volume fill
    volume_fraction: f64,

    /// Clock text, elapsed and duration
    clock: (String, String),

    /// Fullscreen marker state
    fullscreen_marker: bool,
}

impl ConsoleSurface {
    /// Create a console surface
    ///
    /// # Arguments
    ///
    /// * `bar_cells` - Number of cells used to render fill bars
    pub fn new(bar_cells: usize) -> Self {
        Self {
            bar_cells: bar_cells.max(1),
            play_glyph: PlaybackGlyph::Play,
            volume_glyph: VolumeGlyph::Up,
            progress_fraction: 0.0,
            volume_fraction: 0.0,
            clock: (String::from("0:00"), String::from("--:--")),
            fullscreen_marker: false,
        }
    }

    /// Render a fraction as a fill bar string
    fn bar(&self, fraction: f64) -> String {
        let filled = (fraction.clamp(0.0, 1.0) * self.bar_cells as f64).round() as usize;
        let mut bar = String::with_capacity(self.bar_cells);
        for cell in 0..self.bar_cells {
            bar.push(if cell < filled { '█' } else { '─' });
        }
        bar
    }

    /// One-line rendering of the whole deck, logged after discrete changes
    fn deck_line(&self) -> String {
        format!(
            "[{}] {} {} / {}  {} {}",
            self.play_glyph.symbol(),
            self.bar(self.progress_fraction),
            self.clock.0,
            self.clock.1,
            self.volume_glyph.symbol(),
            percent_string(self.volume_fraction),
        )
    }
}

impl ControlSurface for ConsoleSurface {
    fn set_play_control(&mut self, glyph: PlaybackGlyph) -> Result<()> {
        self.play_glyph = glyph;
        info!("Play control: {} ({})", glyph.symbol(), glyph.tooltip());
        info!("{}", self.deck_line());
        Ok(())
    }

    fn set_progress_fill(&mut self, fraction: f64) -> Result<()> {
        self.progress_fraction = fraction;
        debug!("Progress fill: {}", percent_string(fraction));
        Ok(())
    }

    fn set_clock(&mut self, elapsed: &str, duration: &str) -> Result<()> {
        self.clock = (elapsed.to_string(), duration.to_string());
        debug!("Clock: {} / {}", elapsed, duration);
        Ok(())
    }

    fn set_volume_fill(&mut self, fraction: f64) -> Result<()> {
        self.volume_fraction = fraction;
        debug!("Volume fill: {}", percent_string(fraction));
        Ok(())
    }

    fn set_volume_control(&mut self, glyph: VolumeGlyph) -> Result<()> {
        self.volume_glyph = glyph;
        info!("Volume control: {} ({})", glyph.symbol(), glyph.tooltip());
        Ok(())
    }

    fn set_fullscreen_marker(&mut self, active: bool) -> Result<()> {
        self.fullscreen_marker = active;
        info!(
            "Fullscreen marker {}",
            if active { "added" } else { "removed" }
        );
        Ok(())
    }

    fn enter_fullscreen(&mut self) -> Result<()> {
        // no presentation capability on a console; the request is a no-op
        debug!("Fullscreen presentation requested");
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        debug!("Fullscreen exit requested");
        Ok(())
    }
}
