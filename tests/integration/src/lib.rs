//! Integration test utilities for PlayDeck
//!
//! This module provides common utilities for integration testing:
//! - A recording control surface that captures every widget write
//! - A test fixture wiring a simulated media element to a controller

use anyhow::Result;
use parking_lot::Mutex;
use playdeck::player::display::percent_string;
use playdeck::{
    ControlSurface, PlaybackGlyph, PlayerConfig, PlayerController, SimMediaElement, VolumeGlyph,
};
use std::sync::Arc;

/// Control surface that records widget state instead of rendering it
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Last play control glyph written
    pub play_glyph: Option<PlaybackGlyph>,

    /// Last volume control glyph written
    pub volume_glyph: Option<VolumeGlyph>,

    /// Last progress fill fraction written
    pub progress_fill: Option<f64>,

    /// Last volume fill fraction written
    pub volume_fill: Option<f64>,

    /// Last clock text written (elapsed, duration)
    pub clock: Option<(String, String)>,

    /// Fullscreen marker state
    pub fullscreen_marker: bool,

    /// Number of fullscreen enter requests received
    pub enter_calls: usize,

    /// Number of fullscreen exit requests received
    pub exit_calls: usize,
}

impl RecordingSurface {
    /// The volume fill rendered as a CSS-style percentage width
    pub fn volume_fill_percent(&self) -> Option<String> {
        self.volume_fill.map(percent_string)
    }

    /// The progress fill rendered as a CSS-style percentage width
    pub fn progress_fill_percent(&self) -> Option<String> {
        self.progress_fill.map(percent_string)
    }
}

impl ControlSurface for RecordingSurface {
    fn set_play_control(&mut self, glyph: PlaybackGlyph) -> playdeck::Result<()> {
        self.play_glyph = Some(glyph);
        Ok(())
    }

    fn set_progress_fill(&mut self, fraction: f64) -> playdeck::Result<()> {
        self.progress_fill = Some(fraction);
        Ok(())
    }

    fn set_clock(&mut self, elapsed: &str, duration: &str) -> playdeck::Result<()> {
        self.clock = Some((elapsed.to_string(), duration.to_string()));
        Ok(())
    }

    fn set_volume_fill(&mut self, fraction: f64) -> playdeck::Result<()> {
        self.volume_fill = Some(fraction);
        Ok(())
    }

    fn set_volume_control(&mut self, glyph: VolumeGlyph) -> playdeck::Result<()> {
        self.volume_glyph = Some(glyph);
        Ok(())
    }

    fn set_fullscreen_marker(&mut self, active: bool) -> playdeck::Result<()> {
        self.fullscreen_marker = active;
        Ok(())
    }

    fn enter_fullscreen(&mut self) -> playdeck::Result<()> {
        self.enter_calls += 1;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> playdeck::Result<()> {
        self.exit_calls += 1;
        Ok(())
    }
}

/// Test fixture wiring the simulated element to a controller
pub struct TestFixture {
    pub media: Arc<Mutex<SimMediaElement>>,
    pub surface: Arc<Mutex<RecordingSurface>>,
    pub controller: PlayerController,
}

impl TestFixture {
    /// Create a fixture with no media loaded
    pub fn new() -> Result<Self> {
        let media = Arc::new(Mutex::new(SimMediaElement::new()));
        let surface = Arc::new(Mutex::new(RecordingSurface::default()));
        let controller = PlayerController::new(
            media.clone(),
            surface.clone(),
            &PlayerConfig::default(),
        )?;

        Ok(Self {
            media,
            surface,
            controller,
        })
    }

    /// Create a fixture with media of the given length already announced
    pub fn with_media(duration: f64) -> Result<Self> {
        let mut fixture = Self::new()?;
        let canplay = fixture.media.lock().load(duration);
        fixture.controller.handle_media_event(canplay)?;
        Ok(fixture)
    }

    /// Advance the simulated clock and feed the events to the controller
    pub fn tick(&mut self, dt: f64) -> Result<()> {
        let events = self.media.lock().advance(dt);
        for event in events {
            self.controller.handle_media_event(event)?;
        }
        Ok(())
    }
}
