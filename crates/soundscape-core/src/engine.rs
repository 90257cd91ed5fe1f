//! Engine orchestration: configuration, start-up and the public API.

use fnv::FnvHashSet;
use glam::{Vec2, Vec3};

use crate::constants::{
    DEFAULT_ROW_THRESHOLD, HOVER_PLAYBACK_RATE, LISTENER_DEPTH, NORMAL_PLAYBACK_RATE,
    POINTER_VOLUME_CEILING, SOURCE_DEPTH, TARGET_VOLUME_CEILING,
};
use crate::error::SoundscapeError;
use crate::registry::Registry;
use crate::render::{SpatialParams, SpatialRenderer};
use crate::source::SpatialSource;
use crate::surface::TargetSurface;
use crate::tracker::PointerTracker;

/// Associates a target identity with the sound asset played at it.
/// The sound name is resolved against the configured base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetBinding<Id> {
    pub target: Id,
    pub sound: String,
}

/// Engine configuration. Immutable once the engine is active.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub base_url: String,
    pub row_threshold: f32,
    pub pointer_sound: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            row_threshold: DEFAULT_ROW_THRESHOLD,
            pointer_sound: None,
        }
    }
}

/// The soundscape engine. Owns the registry and the pointer tracker; the
/// host owns the event loop and pushes events in (`on_pointer_move`,
/// `on_pointer_enter`, `on_pointer_leave`). Everything runs synchronously on
/// the caller's thread.
pub struct SoundScaper<S: TargetSurface, R: SpatialRenderer> {
    surface: S,
    renderer: R,
    config: EngineConfig,
    pending: Vec<TargetBinding<S::Id>>,
    registry: Registry<S::Id, R>,
    tracker: PointerTracker,
}

impl<S: TargetSurface, R: SpatialRenderer> SoundScaper<S, R> {
    pub fn new(surface: S, renderer: R) -> Self {
        Self {
            surface,
            renderer,
            config: EngineConfig::default(),
            pending: Vec::new(),
            registry: Registry::new(),
            tracker: PointerTracker::new(),
        }
    }

    pub fn with_row_threshold(surface: S, renderer: R, row_threshold: f32) -> Self {
        let mut engine = Self::new(surface, renderer);
        engine.config.row_threshold = row_threshold.max(0.0);
        engine
    }

    /// Set the asset base URL (sounds resolve as `base_url + "/" + name`) and
    /// optionally the row threshold. Rejected once the engine is active.
    pub fn configure(
        &mut self,
        base_url: impl Into<String>,
        row_threshold: Option<f32>,
    ) -> Result<(), SoundscapeError> {
        self.ensure_idle()?;
        self.config.base_url = base_url.into();
        if let Some(threshold) = row_threshold {
            self.config.row_threshold = threshold.max(0.0);
        }
        Ok(())
    }

    /// Replace the pending target list used at start-up, plus the pointer
    /// sound. Identities must be unique; the accepted list is returned for
    /// caller confirmation. Rejected once the engine is active.
    pub fn set_targets(
        &mut self,
        bindings: Vec<TargetBinding<S::Id>>,
        pointer_sound: Option<String>,
    ) -> Result<&[TargetBinding<S::Id>], SoundscapeError> {
        self.ensure_idle()?;
        {
            let mut seen = FnvHashSet::default();
            for binding in &bindings {
                if !seen.insert(&binding.target) {
                    return Err(SoundscapeError::DuplicateTarget);
                }
            }
        }
        self.pending = bindings;
        self.config.pointer_sound = pointer_sound;
        Ok(&self.pending)
    }

    /// Transition Idle -> Active: create the renderer context, center the
    /// listener on the viewport, build the pointer source and one source per
    /// configured target, and start playback of everything.
    ///
    /// Re-entry fails with [`SoundscapeError::AlreadyStarted`] and leaves the
    /// running state untouched; the one renderer context is never recreated.
    /// If population fails partway, every source created so far is disposed
    /// and the engine stays idle.
    pub fn start(&mut self) -> Result<(), SoundscapeError> {
        if self.tracker.is_active() {
            return Err(SoundscapeError::AlreadyStarted);
        }
        self.renderer.initialize()?;
        let viewport = self.surface.viewport_size();
        self.renderer.set_listener_position(Vec3::new(
            viewport.x / 2.0,
            viewport.y / 2.0,
            LISTENER_DEPTH,
        ));

        if let Err(e) = self.populate() {
            self.registry.clear();
            return Err(e);
        }
        self.registry.play_all();
        self.tracker.activate(self.config.row_threshold);
        log::info!(
            "[engine] active: {} sources, row threshold {}",
            self.registry.len(),
            self.config.row_threshold
        );
        Ok(())
    }

    /// Create, start and register a source for `target`. Needs an active
    /// engine. On failure the registry is unchanged.
    pub fn add_sound(&mut self, target: S::Id, sound: &str) -> Result<(), SoundscapeError> {
        if !self.tracker.is_active() {
            return Err(SoundscapeError::NotStarted);
        }
        if self.registry.contains(&target) {
            return Err(SoundscapeError::DuplicateTarget);
        }
        let url = self.resolve_url(sound);
        let position = self.rect_origin(&target);
        log::info!("[engine] add sound {:?} -> {}", target, url);
        let mut source = self.create_source(Some(target), &url, position, TARGET_VOLUME_CEILING)?;
        source.play();
        self.registry.add(source)
    }

    /// Stop and drop the source bound to `target`. Silent no-op when absent.
    pub fn remove_sound(&mut self, target: &S::Id) {
        self.registry.remove(target);
    }

    /// Swap the asset played at `target` in place and restart its playback;
    /// the source keeps its slot and spatial binding. Silent no-op when
    /// absent.
    pub fn modify_sound(&mut self, target: &S::Id, sound: &str) -> Result<(), SoundscapeError> {
        let url = self.resolve_url(sound);
        self.registry.modify(target, &url)
    }

    /// One sample from the host's pointer stream. No-op while idle.
    pub fn on_pointer_move(&mut self, pointer: Vec2) {
        self.tracker
            .on_move(pointer, &self.surface, &mut self.registry);
    }

    /// Hover acceleration: the target's sound plays at double rate while the
    /// pointer is over it.
    pub fn on_pointer_enter(&mut self, target: &S::Id) {
        if let Some(source) = self.registry.get_mut(target) {
            source.set_playback_rate(HOVER_PLAYBACK_RATE);
        }
    }

    pub fn on_pointer_leave(&mut self, target: &S::Id) {
        if let Some(source) = self.registry.get_mut(target) {
            source.set_playback_rate(NORMAL_PLAYBACK_RATE);
        }
    }

    pub fn is_active(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry<S::Id, R> {
        &self.registry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn populate(&mut self) -> Result<(), SoundscapeError> {
        if let Some(name) = self.config.pointer_sound.clone() {
            let url = self.resolve_url(&name);
            let source = self.create_source(None, &url, Vec2::ZERO, POINTER_VOLUME_CEILING)?;
            self.registry.add(source)?;
        }
        for binding in self.pending.clone() {
            let url = self.resolve_url(&binding.sound);
            let position = self.rect_origin(&binding.target);
            let source =
                self.create_source(Some(binding.target), &url, position, TARGET_VOLUME_CEILING)?;
            self.registry.add(source)?;
        }
        Ok(())
    }

    fn create_source(
        &mut self,
        target: Option<S::Id>,
        url: &str,
        position: Vec2,
        initial_volume: f32,
    ) -> Result<SpatialSource<S::Id, R>, SoundscapeError> {
        let audio = self.renderer.create_audio(url)?;
        let spatial = self.renderer.bind_spatial(
            &audio,
            Vec3::new(position.x, position.y, SOURCE_DEPTH),
            &SpatialParams::default(),
        )?;
        Ok(SpatialSource::new(target, audio, spatial, initial_volume))
    }

    fn rect_origin(&self, id: &S::Id) -> Vec2 {
        match self.surface.bounding_rect(id) {
            Some(rect) => rect.origin(),
            None => {
                log::warn!("[engine] no bounding rect for {:?}, placing at origin", id);
                Vec2::ZERO
            }
        }
    }

    fn resolve_url(&self, name: &str) -> String {
        format!("{}/{}", self.config.base_url, name)
    }

    fn ensure_idle(&self) -> Result<(), SoundscapeError> {
        if self.tracker.is_active() {
            return Err(SoundscapeError::AlreadyStarted);
        }
        Ok(())
    }
}
