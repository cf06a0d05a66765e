use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code.
    #[inline]
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

/// Pointer input already converted to normalized coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { ndc: Vec2 },
    Down { ndc: Vec2, button: PointerButton },
    Up { ndc: Vec2, button: PointerButton },
    Click { ndc: Vec2, button: PointerButton },
}

/// Convert a position relative to the canvas' top-left corner (CSS pixels)
/// into [-1, 1] coordinates with the origin at the centre and Y pointing up.
/// Returns `None` for a zero-sized canvas.
#[inline]
pub fn pointer_ndc(x_css: f32, y_css: f32, width_css: f32, height_css: f32) -> Option<Vec2> {
    if width_css > 0.0 && height_css > 0.0 {
        Some(Vec2::new(
            (x_css / width_css) * 2.0 - 1.0,
            -(y_css / height_css) * 2.0 + 1.0,
        ))
    } else {
        None
    }
}
