//! Pointer tracker: turns the pointer-position stream into volume writes.

use glam::Vec2;

use crate::constants::{
    DEFAULT_ROW_THRESHOLD, POINTER_VOLUME_CEILING, ROW_BAND_VOLUME, TARGET_VOLUME_CEILING,
};
use crate::policy;
use crate::registry::Registry;
use crate::render::SpatialRenderer;
use crate::surface::TargetSurface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrackerState {
    Idle,
    Active,
}

/// Idle until the engine starts; once active it recomputes every source's
/// volume per pointer sample until the session ends (there is no stop).
pub struct PointerTracker {
    state: TrackerState,
    row_threshold: f32,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            state: TrackerState::Idle,
            row_threshold: DEFAULT_ROW_THRESHOLD,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == TrackerState::Active
    }

    /// Idle -> Active. The row threshold is latched here; configuration is
    /// immutable once the engine runs.
    pub fn activate(&mut self, row_threshold: f32) {
        self.state = TrackerState::Active;
        self.row_threshold = row_threshold;
    }

    /// Handle one pointer sample. Runs synchronously and never fails: a
    /// target whose rectangle is gone right now is skipped, not an error, so
    /// one stale source cannot silence feedback for the rest.
    pub fn on_move<S, R>(
        &mut self,
        pointer: Vec2,
        surface: &S,
        registry: &mut Registry<S::Id, R>,
    ) where
        S: TargetSurface,
        R: SpatialRenderer,
    {
        if !self.is_active() {
            return;
        }
        let screen_height = surface.screen_height();

        if let Some(source) = registry.pointer_mut() {
            source.set_position(pointer);
            source.apply_cone();
            source.set_volume(policy::volume_for_y(
                pointer.y,
                POINTER_VOLUME_CEILING,
                screen_height,
            ));
        }

        for source in registry.iter_mut() {
            let Some(id) = source.target() else {
                continue;
            };
            let Some(rect) = surface.bounding_rect(id) else {
                continue;
            };
            let volume = if policy::within_row_band(rect.top(), pointer.y, self.row_threshold) {
                ROW_BAND_VOLUME
            } else {
                policy::volume_for_y(rect.top(), TARGET_VOLUME_CEILING, screen_height)
            };
            source.set_volume(volume);
        }
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}
