//! PlayDeck: a custom video player control surface
//!
//! The crate binds a playback element (the native media engine, behind the
//! [`media::MediaElement`] trait) to a set of UI control widgets (behind the
//! [`surface::ControlSurface`] trait). The [`player::PlayerController`]
//! mirrors element state into the widgets on every media lifecycle event and
//! translates widget interactions back into element mutations: play/pause
//! toggling, scrub/seek, volume with mute/unmute and snap-to-extreme,
//! playback speed, and fullscreen toggling.

pub mod media;
pub mod player;
pub mod surface;
pub mod utils;

pub use media::{MediaElement, MediaEvent, SimMediaElement};
pub use player::{PlaybackGlyph, PlayerConfig, PlayerController, VolumeGlyph};
pub use surface::{ConsoleSurface, ControlSurface, SurfaceEvent};
pub use utils::error::{PlayDeckError, Result};
