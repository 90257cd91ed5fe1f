//! DOM-backed target surface.

use glam::Vec2;
use soundscape_core::{Rect, TargetSurface};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Targets are element ids; rectangles come from the live layout, so moving
/// or resizing elements is picked up on the next pointer sample.
#[derive(Clone, Copy, Default)]
pub struct DomSurface;

impl DomSurface {
    pub fn new() -> Self {
        Self
    }

    pub fn element(&self, id: &str) -> Option<web::Element> {
        window_document().and_then(|d| d.get_element_by_id(id))
    }
}

impl TargetSurface for DomSurface {
    type Id = String;

    fn bounding_rect(&self, id: &String) -> Option<Rect> {
        let rect = self.element(id)?.get_bounding_client_rect();
        Some(Rect::new(
            rect.x() as f32,
            rect.y() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ))
    }

    fn viewport_size(&self) -> Vec2 {
        let Some(window) = web::window() else {
            return Vec2::ZERO;
        };
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Vec2::new(w as f32, h as f32)
    }

    fn screen_height(&self) -> f32 {
        web::window()
            .and_then(|w| w.screen().ok())
            .and_then(|s| s.height().ok())
            .map(|h| h as f32)
            .unwrap_or(0.0)
    }
}
