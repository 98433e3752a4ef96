//! Player controller implementation for PlayDeck
//!
//! This module provides the PlayerController that keeps a playback element
//! and the control surface in sync. Media lifecycle events refresh the
//! widgets; widget interactions mutate the element. All state lives in the
//! controller instance; nothing is global and nothing persists.

use crate::media::{MediaElement, MediaEvent};
use crate::player::display::{self, CLOCK_PLACEHOLDER};
use crate::player::{snap_volume, volume_glyph, PlaybackGlyph, PlayerConfig, VolumeGlyph};
use crate::surface::{ControlSurface, SurfaceEvent};
use crate::utils::error::Result;

use log::{debug, info, warn};
use parking_lot::Mutex;
use std::sync::Arc;

/// Main controller binding a playback element to its control surface
pub struct PlayerController {
    /// Playback element handle
    media: Arc<Mutex<dyn MediaElement>>,

    /// Control surface handle
    surface: Arc<Mutex<dyn ControlSurface>>,

    /// Volume restored by the next unmute
    restore_volume: f64,

    /// Whether we believe the player is presented fullscreen
    fullscreen: bool,

    /// Set by the end-of-media event, cleared by the next play toggle
    ended: bool,
}

impl PlayerController {
    /// Create a controller and mirror the element's state into the widgets
    ///
    /// # Arguments
    ///
    /// * `media` - Playback element handle
    /// * `surface` - Control surface handle
    /// * `config` - Controller configuration
    pub fn new(
        media: Arc<Mutex<dyn MediaElement>>,
        surface: Arc<Mutex<dyn ControlSurface>>,
        config: &PlayerConfig,
    ) -> Result<Self> {
        let mut controller = Self {
            media,
            surface,
            restore_volume: config.default_volume,
            fullscreen: false,
            ended: false,
        };
        controller.sync_widgets()?;
        Ok(controller)
    }

    /// Dispatch a user interaction from the control surface
    pub fn handle_surface_event(&mut self, event: SurfaceEvent) -> Result<()> {
        match event {
            // both the play button and the video frame toggle playback
            SurfaceEvent::PlayButton | SurfaceEvent::VideoFrame => self.toggle_play(),
            SurfaceEvent::ProgressClick {
                offset_x,
                track_width,
            } => self.seek_to_offset(offset_x, track_width),
            SurfaceEvent::VolumeClick {
                offset_x,
                track_width,
            } => self.change_volume(offset_x, track_width),
            SurfaceEvent::VolumeIcon => self.toggle_mute(),
            SurfaceEvent::SpeedSelected { rate } => self.set_speed(rate),
            SurfaceEvent::FullscreenButton => self.toggle_fullscreen(),
            SurfaceEvent::FullscreenChanged { active } => self.reconcile_fullscreen(active),
        }
    }

    /// Dispatch a lifecycle event from the playback element
    pub fn handle_media_event(&mut self, event: MediaEvent) -> Result<()> {
        match event {
            MediaEvent::CanPlay | MediaEvent::TimeUpdate => self.update_progress(),
            MediaEvent::Ended => self.mark_ended(),
        }
    }

    /// Toggle between playing and paused
    pub fn toggle_play(&mut self) -> Result<()> {
        self.ended = false;

        let paused = self.media.lock().is_paused();
        if paused {
            self.media.lock().play()?;
            self.surface.lock().set_play_control(PlaybackGlyph::Pause)?;
            info!("Playback started");
        } else {
            self.media.lock().pause()?;
            self.surface.lock().set_play_control(PlaybackGlyph::Play)?;
            info!("Playback paused");
        }

        Ok(())
    }

    /// Recompute the progress fill and clock from the element's position
    pub fn update_progress(&mut self) -> Result<()> {
        let (current, duration) = {
            let media = self.media.lock();
            (media.current_time(), media.duration())
        };

        let mut surface = self.surface.lock();
        match (display::progress_fraction(current, duration), duration) {
            (Some(fraction), Some(total)) => {
                surface.set_progress_fill(fraction)?;
                surface.set_clock(&display::format_clock(current), &display::format_clock(total))?;
            }
            _ => {
                // metadata not loaded yet: leave the fill alone, show a placeholder
                surface.set_clock(&display::format_clock(current), CLOCK_PLACEHOLDER)?;
            }
        }

        Ok(())
    }

    /// Seek to a click at `offset_x` within a progress track `track_width` wide
    pub fn seek_to_offset(&mut self, offset_x: f64, track_width: f64) -> Result<()> {
        if track_width <= 0.0 {
            debug!("Seek ignored: degenerate track width {}", track_width);
            return Ok(());
        }

        let total = {
            let media = self.media.lock();
            media.duration().filter(|d| d.is_finite() && *d > 0.0)
        };
        let Some(total) = total else {
            debug!("Seek ignored: duration unknown");
            return Ok(());
        };

        let fraction = (offset_x / track_width).clamp(0.0, 1.0);
        self.media.lock().set_current_time(fraction * total);
        debug!("Seek to {} ({:.2}s)", display::percent_string(fraction), fraction * total);

        // refresh right away instead of waiting for the next progress tick
        self.update_progress()
    }

    /// Apply a volume click at `offset_x` within a track `track_width` wide
    pub fn change_volume(&mut self, offset_x: f64, track_width: f64) -> Result<()> {
        if track_width <= 0.0 {
            debug!("Volume change ignored: degenerate track width {}", track_width);
            return Ok(());
        }

        let volume = snap_volume(offset_x / track_width);
        self.media.lock().set_volume(volume);
        self.show_volume(volume)?;

        // slider input always becomes the unmute restore value
        self.restore_volume = volume;
        info!("Volume set to {}", display::percent_string(volume));

        Ok(())
    }

    /// Toggle between silence and the remembered volume
    pub fn toggle_mute(&mut self) -> Result<()> {
        let volume = self.media.lock().volume();

        if volume > 0.0 {
            self.restore_volume = volume;
            self.media.lock().set_volume(0.0);
            {
                let mut surface = self.surface.lock();
                surface.set_volume_fill(0.0)?;
                surface.set_volume_control(VolumeGlyph::Muted)?;
            }
            info!("Muted, will restore {}", display::percent_string(self.restore_volume));
        } else {
            self.media.lock().set_volume(self.restore_volume);
            self.show_volume(self.restore_volume)?;
            info!("Unmuted to {}", display::percent_string(self.restore_volume));
        }

        Ok(())
    }

    /// Set the playback rate
    ///
    /// The rate is applied verbatim; range handling belongs to the element.
    pub fn set_speed(&mut self, rate: f64) -> Result<()> {
        self.media.lock().set_playback_rate(rate);
        info!("Playback speed set to {}x", rate);
        Ok(())
    }

    /// Toggle fullscreen presentation
    pub fn toggle_fullscreen(&mut self) -> Result<()> {
        let entering = !self.fullscreen;

        {
            let mut surface = self.surface.lock();
            let request = if entering {
                surface.enter_fullscreen()
            } else {
                surface.exit_fullscreen()
            };
            // hosts without fullscreen reject the request; the marker and
            // flag still track the toggle, and reconcile_fullscreen repairs
            // them when the host reports its actual state
            if let Err(e) = request {
                warn!("Fullscreen request failed: {}", e);
            }
            surface.set_fullscreen_marker(entering)?;
        }

        self.fullscreen = entering;
        info!("Fullscreen {}", if entering { "entered" } else { "left" });
        Ok(())
    }

    /// Whether the controller believes the player is fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Volume the next unmute will restore
    pub fn restore_volume(&self) -> f64 {
        self.restore_volume
    }

    /// Show the replay control once the media ends
    fn mark_ended(&mut self) -> Result<()> {
        self.ended = true;
        info!("End of media reached");
        self.surface.lock().set_play_control(PlaybackGlyph::Replay)
    }

    /// Adopt the host's fullscreen state (e.g. after an Escape exit)
    fn reconcile_fullscreen(&mut self, active: bool) -> Result<()> {
        if self.fullscreen != active {
            debug!("Fullscreen state reconciled from host: {}", active);
            self.fullscreen = active;
            self.surface.lock().set_fullscreen_marker(active)?;
        }
        Ok(())
    }

    /// Resize the volume fill and pick the matching glyph
    fn show_volume(&mut self, volume: f64) -> Result<()> {
        let mut surface = self.surface.lock();
        surface.set_volume_fill(volume)?;
        surface.set_volume_control(volume_glyph(volume))
    }

    /// One full mirror pass: play glyph, volume widgets, progress display
    fn sync_widgets(&mut self) -> Result<()> {
        let (paused, volume) = {
            let media = self.media.lock();
            (media.is_paused(), media.volume())
        };

        self.surface.lock().set_play_control(if paused {
            PlaybackGlyph::Play
        } else {
            PlaybackGlyph::Pause
        })?;
        self.show_volume(volume)?;
        self.update_progress()
    }
}
