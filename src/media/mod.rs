//! Playback element seam for PlayDeck
//!
//! The native media engine (decoding, rendering, buffering, audio mixing)
//! lives behind this boundary. The controller only reads and writes the
//! playback attributes below and reacts to the lifecycle events the engine
//! emits; it never drives decoding itself.

pub mod sim;

pub use sim::SimMediaElement;

use crate::utils::error::Result;

/// Playback element trait defining the interface to the media engine
pub trait MediaElement: Send {
    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Move the playback position
    ///
    /// # Arguments
    ///
    /// * `seconds` - Target position; the element clamps it into the media range
    fn set_current_time(&mut self, seconds: f64);

    /// Media length in seconds, `None` until metadata is loaded
    fn duration(&self) -> Option<f64>;

    /// Whether playback is currently paused
    fn is_paused(&self) -> bool;

    /// Request playback to start
    ///
    /// Hosts may reject the request (no media loaded, playback policy).
    fn play(&mut self) -> Result<()>;

    /// Request playback to pause
    fn pause(&mut self) -> Result<()>;

    /// Current volume (0.0 to 1.0)
    fn volume(&self) -> f64;

    /// Set the volume
    ///
    /// # Arguments
    ///
    /// * `volume` - Volume level (0.0 to 1.0)
    fn set_volume(&mut self, volume: f64);

    /// Current playback rate multiplier
    fn playback_rate(&self) -> f64;

    /// Set the playback rate multiplier
    fn set_playback_rate(&mut self, rate: f64);
}

/// Lifecycle events emitted by the playback element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// First frame is ready and metadata (duration) is known
    CanPlay,

    /// Playback position advanced
    TimeUpdate,

    /// Playback reached the end of the media
    Ended,
}
