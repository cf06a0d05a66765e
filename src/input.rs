use desk_core::input::{self, PointerButton, PointerEvent};
use glam::Vec2;
use web_sys as web;

/// Which DOM pointer event a listener saw.
#[derive(Clone, Copy, Debug)]
pub enum PointerKind {
    Move,
    Down,
    Up,
    Click,
}

/// Canvas-relative normalized device coordinates of a mouse or pointer event.
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    input::pointer_ndc(
        (ev.client_x() as f64 - rect.left()) as f32,
        (ev.client_y() as f64 - rect.top()) as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

pub fn pointer_event(
    kind: PointerKind,
    ev: &web::MouseEvent,
    canvas: &web::HtmlCanvasElement,
) -> Option<PointerEvent> {
    let ndc = pointer_ndc(ev, canvas)?;
    let button = PointerButton::from_dom(ev.button());
    Some(match kind {
        PointerKind::Move => PointerEvent::Move { ndc },
        PointerKind::Down => PointerEvent::Down { ndc, button },
        PointerKind::Up => PointerEvent::Up { ndc, button },
        PointerKind::Click => PointerEvent::Click { ndc, button },
    })
}

#[inline]
pub fn client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
