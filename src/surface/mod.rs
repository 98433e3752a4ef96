//! Control surface seam for PlayDeck
//!
//! The UI widget set lives behind this boundary: progress and volume fill
//! bars, the play and volume controls with their tooltips, the clock text,
//! and the fullscreen marker. The controller writes fractions and glyphs;
//! how a surface renders them (CSS widths, terminal cells, egui rects) is
//! its own business.

pub mod console;

pub use console::ConsoleSurface;

use crate::player::{PlaybackGlyph, VolumeGlyph};
use crate::utils::error::Result;

/// Control surface trait defining the widget interface
pub trait ControlSurface: Send {
    /// Swap the play control's icon and tooltip
    fn set_play_control(&mut self, glyph: PlaybackGlyph) -> Result<()>;

    /// Resize the progress fill
    ///
    /// # Arguments
    ///
    /// * `fraction` - Played fraction of the media (0.0 to 1.0)
    fn set_progress_fill(&mut self, fraction: f64) -> Result<()>;

    /// Update the clock text
    ///
    /// # Arguments
    ///
    /// * `elapsed` - Formatted elapsed time
    /// * `duration` - Formatted media length, or a placeholder while unknown
    fn set_clock(&mut self, elapsed: &str, duration: &str) -> Result<()>;

    /// Resize the volume fill
    ///
    /// # Arguments
    ///
    /// * `fraction` - Effective volume (0.0 to 1.0)
    fn set_volume_fill(&mut self, fraction: f64) -> Result<()>;

    /// Swap the volume control's icon and tooltip
    fn set_volume_control(&mut self, glyph: VolumeGlyph) -> Result<()>;

    /// Add or remove the fullscreen marker on the playback surface
    fn set_fullscreen_marker(&mut self, active: bool) -> Result<()>;

    /// Request fullscreen presentation from the host
    fn enter_fullscreen(&mut self) -> Result<()>;

    /// Request the host to leave fullscreen presentation
    fn exit_fullscreen(&mut self) -> Result<()>;
}

/// User interactions arriving from the control surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// Play button clicked
    PlayButton,

    /// The video frame itself was clicked
    VideoFrame,

    /// Progress track clicked at `offset_x` within a track `track_width` wide
    ProgressClick { offset_x: f64, track_width: f64 },

    /// Volume track clicked at `offset_x` within a track `track_width` wide
    VolumeClick { offset_x: f64, track_width: f64 },

    /// Volume icon clicked (mute toggle)
    VolumeIcon,

    /// Speed selector changed to a new playback rate
    SpeedSelected { rate: f64 },

    /// Fullscreen button clicked
    FullscreenButton,

    /// Host notification that fullscreen presentation changed externally
    FullscreenChanged { active: bool },
}
