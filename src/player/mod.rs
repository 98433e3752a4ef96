//! Player controller module for PlayDeck
//!
//! This module hosts the controller that keeps a playback element and a set
//! of UI control widgets in sync: playback state into glyphs, position into
//! the progress bar and clock, volume into the fill bar and volume icon,
//! and user interactions back into element mutations.

mod controller;
pub mod display;

pub use controller::PlayerController;

/// Volume fractions below this snap to exact silence.
pub const VOLUME_SNAP_FLOOR: f64 = 0.1;

/// Volume fractions above this snap to exact maximum.
pub const VOLUME_SNAP_CEIL: f64 = 0.9;

/// Tier boundary between the "down" and "up" volume glyphs.
pub const VOLUME_TIER_SPLIT: f64 = 0.5;

/// Controller configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    /// Volume restored by the first unmute when nothing was remembered yet (0.0 to 1.0)
    pub default_volume: f64,

    /// Playback rates offered by the speed selector
    pub speed_presets: Vec<f64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            default_volume: 0.5,
            speed_presets: vec![0.5, 0.75, 1.0, 1.5, 2.0],
        }
    }
}

/// Glyph shown on the play control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackGlyph {
    /// Playback can be started
    Play,

    /// Playback is running and can be paused
    Pause,

    /// Playback reached the end of the media
    Replay,
}

impl PlaybackGlyph {
    /// Icon character for text surfaces
    pub fn symbol(&self) -> &'static str {
        match self {
            PlaybackGlyph::Play => "▶",
            PlaybackGlyph::Pause => "⏸",
            PlaybackGlyph::Replay => "↻",
        }
    }

    /// Tooltip text for the play control
    pub fn tooltip(&self) -> &'static str {
        match self {
            PlaybackGlyph::Play => "Play",
            PlaybackGlyph::Pause => "Pause",
            PlaybackGlyph::Replay => "Replay",
        }
    }
}

/// Glyph shown on the volume control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeGlyph {
    /// Volume above the tier split
    Up,

    /// Volume at or below the tier split, but audible
    Down,

    /// Volume is exactly zero
    Off,

    /// Silenced through the mute toggle
    Muted,
}

impl VolumeGlyph {
    /// Icon character for text surfaces
    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeGlyph::Up => "🔊",
            VolumeGlyph::Down => "🔉",
            VolumeGlyph::Off => "🔈",
            VolumeGlyph::Muted => "🔇",
        }
    }

    /// Tooltip text for the volume control
    pub fn tooltip(&self) -> &'static str {
        match self {
            VolumeGlyph::Muted => "Unmute",
            _ => "Mute",
        }
    }
}

/// Pick the volume glyph for an effective volume level.
///
/// The mute toggle produces [`VolumeGlyph::Muted`] directly; this mapping
/// only covers volumes chosen on the slider.
pub fn volume_glyph(volume: f64) -> VolumeGlyph {
    if volume > VOLUME_TIER_SPLIT {
        VolumeGlyph::Up
    } else if volume > 0.0 {
        VolumeGlyph::Down
    } else {
        VolumeGlyph::Off
    }
}

/// Apply the snap-to-extreme policy to a raw volume fraction.
///
/// Clicks near the ends of the track land on exact silence or exact maximum
/// so neither requires pixel-perfect aim; everything in between is used
/// unchanged.
pub fn snap_volume(fraction: f64) -> f64 {
    if fraction < VOLUME_SNAP_FLOOR {
        0.0
    } else if fraction > VOLUME_SNAP_CEIL {
        1.0
    } else {
        fraction
    }
}
