use thiserror::Error;

/// Failures surfaced by the engine's public operations.
///
/// `remove_sound`/`modify_sound` on an absent identity are deliberately not
/// errors; they are silent no-ops.
#[derive(Debug, Error)]
pub enum SoundscapeError {
    /// The asset source could not produce a playable resource for this URL.
    /// Never retried; surfaces to the caller of the add/modify/start path.
    #[error("sound asset unavailable: {url}")]
    AssetUnavailable { url: String },

    /// A live source already exists for this target identity; swap its
    /// content with `modify_sound` instead.
    #[error("target is already registered")]
    DuplicateTarget,

    /// The spatial renderer context could not be created. Fatal to start-up.
    #[error("spatial renderer unavailable: {0}")]
    RendererUnavailable(String),

    /// Configuration and start-up are one-shot; the engine is already active.
    #[error("engine already started")]
    AlreadyStarted,

    /// The operation needs an active engine.
    #[error("engine not started")]
    NotStarted,
}
