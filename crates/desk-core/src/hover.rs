use crate::config::InteractionConfig;
use crate::scene::SceneObject;

/// Cursor the presentation layer should show over the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
    Grab,
    Grabbing,
}

impl CursorStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Pointer => "pointer",
            CursorStyle::Grab => "grab",
            CursorStyle::Grabbing => "grabbing",
        }
    }
}

/// Highlight `object`. The pre-highlight emissive colour is captured the first
/// time only, so repeated entries never overwrite it with the accent.
pub fn enter(object: &mut SceneObject, config: &InteractionConfig) {
    object.cache_original_emissive();
    object.material.emissive = Some(config.hover_accent);
    object.material.emissive_intensity = config.hover_intensity;
    log::debug!("[hover] enter {}", object.name);
}

/// Restore the captured emissive colour. Without a captured colour this does nothing.
pub fn leave(object: &mut SceneObject) {
    if let Some(original) = object.original_emissive() {
        object.material.emissive = Some(original);
        object.material.emissive_intensity = 0.0;
        log::debug!("[hover] leave {}", object.name);
    }
}
