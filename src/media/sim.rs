//! Simulated playback element for PlayDeck
//!
//! A clock-driven stand-in for the native media engine, used by the demo
//! binary, benches, and integration tests. It advances its own position
//! when told to, emits the same lifecycle events a real engine would, and
//! enforces the same attribute semantics (clamped seeks, pause at end).

use crate::media::{MediaElement, MediaEvent};
use crate::utils::error::{PlayDeckError, Result};

/// Simulated media element
#[derive(Debug)]
pub struct SimMediaElement {
    /// Playback position in seconds
    current_time: f64,

    /// Media length, `None` until `load` announces metadata
    duration: Option<f64>,

    /// Paused flag; playback starts paused
    paused: bool,

    /// Volume (0.0 to 1.0)
    volume: f64,

    /// Playback rate multiplier
    rate: f64,
}

impl SimMediaElement {
    /// Create an element with no media loaded
    pub fn new() -> Self {
        Self {
            current_time: 0.0,
            duration: None,
            paused: true,
            volume: 1.0,
            rate: 1.0,
        }
    }

    /// Announce media metadata, as if a source finished probing
    ///
    /// # Arguments
    ///
    /// * `duration` - Media length in seconds
    ///
    /// # Returns
    ///
    /// The `CanPlay` event the host would deliver to the controller
    pub fn load(&mut self, duration: f64) -> MediaEvent {
        self.duration = Some(duration);
        self.current_time = 0.0;
        MediaEvent::CanPlay
    }

    /// Advance the simulated clock by `dt` wall seconds
    ///
    /// # Returns
    ///
    /// The lifecycle events produced by the advance: a progress tick while
    /// playing, plus `Ended` exactly once when the position reaches the
    /// media length. Playback pauses at the end, like a native element
    /// without looping.
    pub fn advance(&mut self, dt: f64) -> Vec<MediaEvent> {
        let Some(total) = self.duration else {
            return Vec::new();
        };
        if self.paused {
            return Vec::new();
        }

        self.current_time += dt * self.rate;
        if self.current_time >= total {
            self.current_time = total;
            self.paused = true;
            vec![MediaEvent::TimeUpdate, MediaEvent::Ended]
        } else {
            vec![MediaEvent::TimeUpdate]
        }
    }
}

impl Default for SimMediaElement {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaElement for SimMediaElement {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        let upper = self.duration.unwrap_or(0.0);
        self.current_time = seconds.clamp(0.0, upper);
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) -> Result<()> {
        if self.duration.is_none() {
            return Err(PlayDeckError::Media("no media loaded".to_string()));
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.paused = true;
        Ok(())
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = rate;
    }
}
