//! Capability trait for the host's target surface.

use glam::Vec2;
use std::fmt::Debug;
use std::hash::Hash;

/// Screen-space bounding rectangle of a tracked element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top edge; the row-band check is centered on it.
    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Where tracked elements live. On the web this is the DOM; tests drive the
/// engine with a synthetic map of rectangles.
pub trait TargetSurface {
    /// Opaque identity of a trackable region (an element id on the web).
    type Id: Clone + Eq + Hash + Debug;

    /// Current bounding rectangle, or `None` when the element is gone.
    /// Elements move and resize, so this is queried on every pointer sample.
    fn bounding_rect(&self, id: &Self::Id) -> Option<Rect>;

    /// Viewport size; the listener sits at its midpoint.
    fn viewport_size(&self) -> Vec2;

    /// Physical screen height, the denominator of the volume falloff.
    fn screen_height(&self) -> f32;
}
