//! A single live audio-emitting unit.

use glam::{Vec2, Vec3};

use crate::constants::SOURCE_DEPTH;
use crate::error::SoundscapeError;
use crate::render::{AudioHandle, ConeParams, SpatialHandle, SpatialRenderer};

/// One playback resource plus one renderer binding, bound to a target
/// identity; `target = None` marks the distinguished pointer source.
///
/// Both handles are owned exclusively: disposing the source releases both.
pub struct SpatialSource<Id, R: SpatialRenderer> {
    audio: R::Audio,
    spatial: R::Spatial,
    target: Option<Id>,
    current_volume: f32,
    disposed: bool,
}

impl<Id, R: SpatialRenderer> SpatialSource<Id, R> {
    pub fn new(
        target: Option<Id>,
        audio: R::Audio,
        spatial: R::Spatial,
        initial_volume: f32,
    ) -> Self {
        let mut source = Self {
            audio,
            spatial,
            target,
            current_volume: 0.0,
            disposed: false,
        };
        source.set_volume(initial_volume);
        source
    }

    pub fn target(&self) -> Option<&Id> {
        self.target.as_ref()
    }

    pub fn is_pointer(&self) -> bool {
        self.target.is_none()
    }

    /// Last volume written to the renderer. Derived, not authoritative; the
    /// tracker recomputes it on every pointer sample.
    pub fn current_volume(&self) -> f32 {
        self.current_volume
    }

    pub fn play(&mut self) {
        self.audio.play();
    }

    /// Clamped to the renderer's accepted `[0, 1]` range before forwarding;
    /// the falloff math may overshoot either end.
    pub fn set_volume(&mut self, volume: f32) {
        let v = volume.clamp(0.0, 1.0);
        self.audio.set_volume(v);
        self.current_volume = v;
    }

    pub fn set_playback_rate(&mut self, rate: f32) {
        self.audio.set_playback_rate(rate);
    }

    /// Swap the asset in place and restart playback. The spatial binding and
    /// its position are untouched, so the renderer sees no churn.
    pub fn set_content(&mut self, url: &str) -> Result<(), SoundscapeError> {
        self.audio.set_source(url)?;
        self.audio.play();
        Ok(())
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.spatial
            .set_position(Vec3::new(position.x, position.y, SOURCE_DEPTH));
    }

    pub fn apply_cone(&mut self) {
        self.spatial.set_cone(ConeParams::default());
    }

    /// Stop playback and release both handles. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.audio.pause();
        self.audio.release();
        self.spatial.release();
    }
}

impl<Id, R: SpatialRenderer> Drop for SpatialSource<Id, R> {
    fn drop(&mut self) {
        self.dispose();
    }
}
