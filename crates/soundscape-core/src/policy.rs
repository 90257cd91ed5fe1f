//! Pure volume mapping driven by vertical screen position.

/// Linear falloff from `max_volume` at the top of the screen to zero at the
/// bottom: `max - (y / screen_height) * max`.
///
/// The result is clamped to `[0, max_volume]`. The clamp is deliberate new
/// behavior: `y` beyond the screen height would otherwise go negative, which
/// no renderer accepts. A non-positive `screen_height` yields `max_volume`.
#[inline]
pub fn volume_for_y(y: f32, max_volume: f32, screen_height: f32) -> f32 {
    if screen_height <= 0.0 {
        return max_volume;
    }
    (max_volume - (y / screen_height) * max_volume).clamp(0.0, max_volume)
}

/// True when `pointer_y` lies within `threshold` of the target's top edge.
/// Both band boundaries are inclusive.
#[inline]
pub fn within_row_band(target_y: f32, pointer_y: f32, threshold: f32) -> bool {
    target_y - threshold <= pointer_y && pointer_y <= target_y + threshold
}
