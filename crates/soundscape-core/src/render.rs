//! Capability traits for the host's spatial audio renderer.
//!
//! The engine never talks to a platform audio API directly. The host hands it
//! a [`SpatialRenderer`]; every source then owns one [`AudioHandle`] (the
//! playback resource) and one [`SpatialHandle`] (the 3D binding) exclusively.

use glam::Vec3;

use crate::constants::{
    CONE_INNER_ANGLE, CONE_OUTER_ANGLE, CONE_OUTER_GAIN, DISTANCE_ROLLOFF, MAX_DISTANCE,
    REF_DISTANCE,
};
use crate::error::SoundscapeError;

/// Cone shape of a directional source. Angles are in degrees; `outer_gain`
/// applies outside the outer cone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConeParams {
    pub inner_angle: f32,
    pub outer_angle: f32,
    pub outer_gain: f32,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            inner_angle: CONE_INNER_ANGLE,
            outer_angle: CONE_OUTER_ANGLE,
            outer_gain: CONE_OUTER_GAIN,
        }
    }
}

/// Full parameter set for a new spatial binding. Conforming renderers apply
/// HRTF-equivalent panning and linear distance attenuation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpatialParams {
    pub cone: ConeParams,
    pub rolloff_factor: f32,
    pub ref_distance: f32,
    pub max_distance: f32,
}

impl Default for SpatialParams {
    fn default() -> Self {
        Self {
            cone: ConeParams::default(),
            rolloff_factor: DISTANCE_ROLLOFF,
            ref_distance: REF_DISTANCE,
            max_distance: MAX_DISTANCE,
        }
    }
}

/// Exclusive looping playback resource of one source.
pub trait AudioHandle {
    fn play(&mut self);
    fn pause(&mut self);
    /// `volume` is already clamped to `[0, 1]` by the caller.
    fn set_volume(&mut self, volume: f32);
    fn set_playback_rate(&mut self, rate: f32);
    /// Swap the underlying asset in place; the caller restarts playback.
    fn set_source(&mut self, url: &str) -> Result<(), SoundscapeError>;
    /// Release the resource. Called at most once.
    fn release(&mut self);
}

/// Exclusive renderer binding holding one source's 3D placement.
pub trait SpatialHandle {
    fn set_position(&mut self, position: Vec3);
    fn set_cone(&mut self, cone: ConeParams);
    /// Release the binding. Called at most once.
    fn release(&mut self);
}

/// The host's spatial audio renderer plus its asset source.
pub trait SpatialRenderer {
    type Audio: AudioHandle;
    type Spatial: SpatialHandle;

    /// Create the renderer context. Fails with
    /// [`SoundscapeError::RendererUnavailable`]; fatal to engine start-up.
    fn initialize(&mut self) -> Result<(), SoundscapeError>;

    /// Move the single listener; the engine centers it on the viewport.
    fn set_listener_position(&mut self, position: Vec3);

    /// Resolve `url` into a looping playback resource. Fails with
    /// [`SoundscapeError::AssetUnavailable`]; a 404 and a network error are
    /// indistinguishable here.
    fn create_audio(&mut self, url: &str) -> Result<Self::Audio, SoundscapeError>;

    /// Bind an audio resource into 3D space at `position`.
    fn bind_spatial(
        &mut self,
        audio: &Self::Audio,
        position: Vec3,
        params: &SpatialParams,
    ) -> Result<Self::Spatial, SoundscapeError>;
}
