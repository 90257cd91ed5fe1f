// Renderer tuning shared by every spatial source.

/// Half-height of the row band around a target's top edge (pixels).
pub const DEFAULT_ROW_THRESHOLD: f32 = 110.0;

// Sources and the listener sit at a fixed forward depth.
pub const SOURCE_DEPTH: f32 = 300.0;
pub const LISTENER_DEPTH: f32 = 300.0;

// Cone applied to every source (degrees, then gain outside the outer cone).
pub const CONE_INNER_ANGLE: f32 = 60.0;
pub const CONE_OUTER_ANGLE: f32 = 90.0;
pub const CONE_OUTER_GAIN: f32 = 0.3;

// Linear distance attenuation.
pub const DISTANCE_ROLLOFF: f32 = 10.0;
pub const REF_DISTANCE: f32 = 1.0;
pub const MAX_DISTANCE: f32 = 10_000.0;

// Volume ceilings differ on purpose: the pointer sound may reach full
// volume, target sounds top out at half unless the pointer is in their row.
pub const POINTER_VOLUME_CEILING: f32 = 1.0;
pub const TARGET_VOLUME_CEILING: f32 = 0.5;
pub const ROW_BAND_VOLUME: f32 = 1.0;

// Playback rates for the hover acceleration effect.
pub const HOVER_PLAYBACK_RATE: f32 = 2.0;
pub const NORMAL_PLAYBACK_RATE: f32 = 1.0;
