//! Spatial audio feedback engine for on-screen elements.
//!
//! Each tracked element plays a looping, positioned sound; a distinguished
//! pointer-bound sound follows the cursor. Volumes are recomputed per pointer
//! sample so a user can locate elements by ear. The host supplies two
//! capabilities: a [`surface::TargetSurface`] exposing element rectangles and
//! a [`render::SpatialRenderer`] turning (position, asset) pairs into
//! rendered 3D audio, which keeps the engine free of platform APIs and
//! testable with synthetic event sequences.

pub mod constants;
pub mod engine;
pub mod error;
pub mod policy;
pub mod registry;
pub mod render;
pub mod source;
pub mod surface;
pub mod tracker;

pub use engine::{EngineConfig, SoundScaper, TargetBinding};
pub use error::SoundscapeError;
pub use registry::Registry;
pub use render::{AudioHandle, ConeParams, SpatialHandle, SpatialParams, SpatialRenderer};
pub use source::SpatialSource;
pub use surface::{Rect, TargetSurface};
pub use tracker::PointerTracker;
