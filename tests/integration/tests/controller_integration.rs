//! Integration tests for the PlayDeck controller
//!
//! These tests drive the controller end to end against the simulated media
//! element and a recording surface:
//! - play/pause/replay glyph transitions
//! - progress display and seek accuracy
//! - volume snap, mute/unmute, icon tiers
//! - speed passthrough and fullscreen toggling

use anyhow::Result;
use playdeck::media::MediaElement;
use playdeck::surface::SurfaceEvent;
use playdeck::{PlaybackGlyph, VolumeGlyph};
use playdeck_integration_tests::TestFixture;

#[test]
fn test_initial_state_before_metadata() -> Result<()> {
    let fixture = TestFixture::new()?;

    let surface = fixture.surface.lock();
    assert_eq!(surface.play_glyph, Some(PlaybackGlyph::Play));
    assert_eq!(surface.progress_fill, None);
    assert_eq!(
        surface.clock,
        Some(("0:00".to_string(), "--:--".to_string()))
    );

    Ok(())
}

#[test]
fn test_play_pause_glyph_transitions() -> Result<()> {
    let mut fixture = TestFixture::with_media(60.0)?;

    fixture
        .controller
        .handle_surface_event(SurfaceEvent::PlayButton)?;
    assert!(!fixture.media.lock().is_paused());
    assert_eq!(
        fixture.surface.lock().play_glyph,
        Some(PlaybackGlyph::Pause)
    );

    fixture
        .controller
        .handle_surface_event(SurfaceEvent::PlayButton)?;
    assert!(fixture.media.lock().is_paused());
    assert_eq!(fixture.surface.lock().play_glyph, Some(PlaybackGlyph::Play));

    Ok(())
}

#[test]
fn test_playthrough_reaches_replay() -> Result<()> {
    let mut fixture = TestFixture::with_media(5.0)?;

    fixture
        .controller
        .handle_surface_event(SurfaceEvent::PlayButton)?;
    for _ in 0..10 {
        fixture.tick(1.0)?;
    }

    // the element paused itself at the end and the control shows Replay
    assert!(fixture.media.lock().is_paused());
    assert_eq!(fixture.media.lock().current_time(), 5.0);
    assert_eq!(
        fixture.surface.lock().play_glyph,
        Some(PlaybackGlyph::Replay)
    );
    assert_eq!(fixture.surface.lock().progress_fill, Some(1.0));

    // replaying from the end starts playback again
    fixture
        .controller
        .handle_surface_event(SurfaceEvent::PlayButton)?;
    assert!(!fixture.media.lock().is_paused());
    assert_eq!(
        fixture.surface.lock().play_glyph,
        Some(PlaybackGlyph::Pause)
    );

    Ok(())
}

#[test]
fn test_progress_clock_format() -> Result<()> {
    let mut fixture = TestFixture::with_media(600.0)?;

    fixture
        .controller
        .handle_surface_event(SurfaceEvent::PlayButton)?;
    fixture.tick(65.0)?;

    let surface = fixture.surface.lock();
    assert_eq!(
        surface.clock,
        Some(("1:05".to_string(), "10:00".to_string()))
    );

    Ok(())
}

#[test]
fn test_seek_accuracy() -> Result<()> {
    let mut fixture = TestFixture::with_media(200.0)?;

    // click at 3/4 of a 400px track
    fixture
        .controller
        .handle_surface_event(SurfaceEvent::ProgressClick {
            offset_x: 300.0,
            track_width: 400.0,
        })?;

    assert_eq!(fixture.media.lock().current_time(), 150.0);

    // the display refreshed without waiting for a progress tick
    let surface = fixture.surface.lock();
    assert_eq!(surface.progress_fill, Some(0.75));
    assert_eq!(surface.progress_fill_percent().as_deref(), Some("75%"));
    assert_eq!(
        surface.clock,
        Some(("2:30".to_string(), "3:20".to_string()))
    );

    Ok(())
}

#[test]
fn test_volume_snap_scenarios() -> Result<()> {
    let mut fixture = TestFixture::with_media(60.0)?;

    // 200px track, click at x=15 lands in the low dead zone
    fixture
        .controller
        .handle_surface_event(SurfaceEvent::VolumeClick {
            offset_x: 15.0,
            track_width: 200.0,
        })?;
    assert_eq!(fixture.media.lock().volume(), 0.0);
    assert_eq!(fixture.surface.lock().volume_glyph, Some(VolumeGlyph::Off));
    assert_eq!(
        fixture.surface.lock().volume_fill_percent().as_deref(),
        Some("0%")
    );

    // 200px track, click at x=170 is outside both dead zones
    fixture
        .controller
        .handle_surface_event(SurfaceEvent::VolumeClick {
            offset_x: 170.0,
            track_width: 200.0,
        })?;
    assert_eq!(fixture.media.lock().volume(), 0.85);
    assert_eq!(fixture.surface.lock().volume_glyph, Some(VolumeGlyph::Up));
    assert_eq!(
        fixture.surface.lock().volume_fill_percent().as_deref(),
        Some("85%")
    );

    // near the top of the track -> snapped to max
    fixture
        .controller
        .handle_surface_event(SurfaceEvent::VolumeClick {
            offset_x: 190.0,
            track_width: 200.0,
        })?;
    assert_eq!(fixture.media.lock().volume(), 1.0);

    Ok(())
}

#[test]
fn test_volume_icon_tiers() -> Result<()> {
    let mut fixture = TestFixture::with_media(60.0)?;

    // 0.4 is audible but at or below the split -> Down
    fixture
        .controller
        .handle_surface_event(SurfaceEvent::VolumeClick {
            offset_x: 80.0,
            track_width: 200.0,
        })?;
    assert_eq!(fixture.surface.lock().volume_glyph, Some(VolumeGlyph::Down));

    // 0.6 is above the split -> Up
    fixture
        .controller
        .handle_surface_event(SurfaceEvent::VolumeClick {
            offset_x: 120.0,
            track_width: 200.0,
        })?;
    assert_eq!(fixture.surface.lock().volume_glyph, Some(VolumeGlyph::Up));

    Ok(())
}

#[test]
fn test_mute_roundtrip_restores_exact_volume() -> Result<()> {
    let mut fixture = TestFixture::with_media(60.0)?;

    fixture
        .controller
        .handle_surface_event(SurfaceEvent::VolumeClick {
            offset_x: 130.0,
            track_width: 200.0,
        })?;
    let before = fixture.media.lock().volume();
    assert_eq!(before, 0.65);

    fixture
        .controller
        .handle_surface_event(SurfaceEvent::VolumeIcon)?;
    assert_eq!(fixture.media.lock().volume(), 0.0);
    assert_eq!(
        fixture.surface.lock().volume_glyph,
        Some(VolumeGlyph::Muted)
    );

    fixture
        .controller
        .handle_surface_event(SurfaceEvent::VolumeIcon)?;
    assert_eq!(fixture.media.lock().volume(), before);
    assert_eq!(fixture.surface.lock().volume_glyph, Some(VolumeGlyph::Up));

    Ok(())
}

#[test]
fn test_speed_passthrough() -> Result<()> {
    let mut fixture = TestFixture::with_media(60.0)?;

    fixture
        .controller
        .handle_surface_event(SurfaceEvent::SpeedSelected { rate: 2.0 })?;
    assert_eq!(fixture.media.lock().playback_rate(), 2.0);

    // the faster rate is visible in playback progression
    fixture
        .controller
        .handle_surface_event(SurfaceEvent::PlayButton)?;
    fixture.tick(5.0)?;
    assert_eq!(fixture.media.lock().current_time(), 10.0);

    Ok(())
}

#[test]
fn test_fullscreen_toggle_roundtrip() -> Result<()> {
    let mut fixture = TestFixture::with_media(60.0)?;

    fixture
        .controller
        .handle_surface_event(SurfaceEvent::FullscreenButton)?;
    assert!(fixture.controller.is_fullscreen());
    assert!(fixture.surface.lock().fullscreen_marker);

    fixture
        .controller
        .handle_surface_event(SurfaceEvent::FullscreenButton)?;
    assert!(!fixture.controller.is_fullscreen());
    assert!(!fixture.surface.lock().fullscreen_marker);

    assert_eq!(fixture.surface.lock().enter_calls, 1);
    assert_eq!(fixture.surface.lock().exit_calls, 1);

    Ok(())
}

#[test]
fn test_external_fullscreen_exit_reconciles() -> Result<()> {
    let mut fixture = TestFixture::with_media(60.0)?;

    fixture
        .controller
        .handle_surface_event(SurfaceEvent::FullscreenButton)?;
    fixture
        .controller
        .handle_surface_event(SurfaceEvent::FullscreenChanged { active: false })?;

    assert!(!fixture.controller.is_fullscreen());
    assert!(!fixture.surface.lock().fullscreen_marker);

    Ok(())
}

#[test]
fn test_seek_before_metadata_is_ignored() -> Result<()> {
    let mut fixture = TestFixture::new()?;

    fixture
        .controller
        .handle_surface_event(SurfaceEvent::ProgressClick {
            offset_x: 100.0,
            track_width: 200.0,
        })?;
    assert_eq!(fixture.media.lock().current_time(), 0.0);
    assert_eq!(fixture.surface.lock().progress_fill, None);

    Ok(())
}
