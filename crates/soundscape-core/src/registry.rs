//! Insertion-ordered collection of live sources.

use smallvec::SmallVec;

use crate::error::SoundscapeError;
use crate::render::SpatialRenderer;
use crate::source::SpatialSource;

/// Ordered registry of [`SpatialSource`]s. At most one source exists per
/// non-pointer identity at any time; duplicates are rejected at insertion.
/// Lookup is a linear scan, which is fine at the handful-of-targets scale
/// this runs at.
pub struct Registry<Id, R: SpatialRenderer> {
    sources: SmallVec<[SpatialSource<Id, R>; 4]>,
}

impl<Id: PartialEq, R: SpatialRenderer> Registry<Id, R> {
    pub fn new() -> Self {
        Self {
            sources: SmallVec::new(),
        }
    }

    /// Insert a source. Fails with [`SoundscapeError::DuplicateTarget`] when
    /// its identity is already live; callers swap content with [`Self::modify`]
    /// instead of re-adding.
    pub fn add(&mut self, source: SpatialSource<Id, R>) -> Result<(), SoundscapeError> {
        if let Some(id) = source.target() {
            if self.contains(id) {
                return Err(SoundscapeError::DuplicateTarget);
            }
        }
        self.sources.push(source);
        Ok(())
    }

    /// Dispose and drop the source bound to `id`. Silently does nothing when
    /// no such source exists; removing twice is fine.
    pub fn remove(&mut self, id: &Id) {
        if let Some(index) = self.position(id) {
            self.sources[index].dispose();
            self.sources.remove(index);
        }
    }

    /// Swap the asset of the source bound to `id` and restart its playback.
    /// Silent no-op when absent.
    pub fn modify(&mut self, id: &Id, url: &str) -> Result<(), SoundscapeError> {
        match self.get_mut(id) {
            Some(source) => source.set_content(url),
            None => Ok(()),
        }
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &Id) -> Option<&SpatialSource<Id, R>> {
        self.position(id).map(|index| &self.sources[index])
    }

    pub fn get_mut(&mut self, id: &Id) -> Option<&mut SpatialSource<Id, R>> {
        let index = self.position(id)?;
        Some(&mut self.sources[index])
    }

    /// The distinguished pointer-bound source, when one was configured.
    pub fn pointer_mut(&mut self) -> Option<&mut SpatialSource<Id, R>> {
        self.sources.iter_mut().find(|source| source.is_pointer())
    }

    /// Insertion-order iteration; bulk per-tick updates rely on this being
    /// deterministic.
    pub fn iter(&self) -> impl Iterator<Item = &SpatialSource<Id, R>> {
        self.sources.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SpatialSource<Id, R>> {
        self.sources.iter_mut()
    }

    pub fn play_all(&mut self) {
        for source in self.sources.iter_mut() {
            source.play();
        }
    }

    /// Dispose every source and empty the registry. Used when start-up
    /// population fails partway and must roll back.
    pub fn clear(&mut self) {
        for source in self.sources.iter_mut() {
            source.dispose();
        }
        self.sources.clear();
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    fn position(&self, id: &Id) -> Option<usize> {
        self.sources
            .iter()
            .position(|source| source.target() == Some(id))
    }
}

impl<Id: PartialEq, R: SpatialRenderer> Default for Registry<Id, R> {
    fn default() -> Self {
        Self::new()
    }
}
