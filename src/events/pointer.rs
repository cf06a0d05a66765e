use crate::app::App;
use crate::dom::Listener;
use crate::input::{self, PointerKind};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Install the canvas pointer listeners. Dropping the returned listeners
/// detaches them.
pub fn wire_input_handlers(app: &Rc<RefCell<App>>) -> Vec<Listener> {
    let canvas = app.borrow().canvas.clone();
    vec![
        wire_pointermove(app, &canvas),
        wire_pointerdown(app, &canvas),
        wire_pointerup(app, &canvas),
        wire_click(app, &canvas),
        wire_wheel(app, &canvas),
    ]
}

fn wire_pointermove(app: &Rc<RefCell<App>>, canvas: &web::EventTarget) -> Listener {
    let app = app.clone();
    Listener::attach(canvas, "pointermove", move |ev: web::PointerEvent| {
        let mut app = app.borrow_mut();
        if let Some(last) = app.orbit_anchor {
            let now = input::client_px(&ev);
            let delta = now - last;
            let height = app.canvas.get_bounding_client_rect().height() as f32;
            app.orbit.rotate_by_pixels(delta.x, delta.y, height);
            app.orbit_anchor = Some(now);
        }
        let Some(event) = input::pointer_event(PointerKind::Move, &ev, &app.canvas) else {
            return;
        };
        let now_ms = app.now_ms();
        let effects = app.interaction.handle_pointer(&event, now_ms);
        app.apply_effects(&effects, &ev);
        app.sync_cursor();
    })
}

fn wire_pointerdown(app: &Rc<RefCell<App>>, canvas: &web::EventTarget) -> Listener {
    let app = app.clone();
    Listener::attach(canvas, "pointerdown", move |ev: web::PointerEvent| {
        let mut app = app.borrow_mut();
        let Some(event) = input::pointer_event(PointerKind::Down, &ev, &app.canvas) else {
            return;
        };
        let now_ms = app.now_ms();
        let effects = app.interaction.handle_pointer(&event, now_ms);
        app.apply_effects(&effects, &ev);
        if app.interaction.is_dragging() {
            _ = app.canvas.set_pointer_capture(ev.pointer_id());
            log::debug!("[drag] pointer {} captured", ev.pointer_id());
        } else if ev.button() == 0 {
            app.orbit_anchor = Some(input::client_px(&ev));
            _ = app.canvas.set_pointer_capture(ev.pointer_id());
        }
        app.sync_cursor();
    })
}

fn wire_pointerup(app: &Rc<RefCell<App>>, canvas: &web::EventTarget) -> Listener {
    let app = app.clone();
    Listener::attach(canvas, "pointerup", move |ev: web::PointerEvent| {
        let mut app = app.borrow_mut();
        app.orbit_anchor = None;
        _ = app.canvas.release_pointer_capture(ev.pointer_id());
        let Some(event) = input::pointer_event(PointerKind::Up, &ev, &app.canvas) else {
            return;
        };
        let now_ms = app.now_ms();
        let effects = app.interaction.handle_pointer(&event, now_ms);
        app.apply_effects(&effects, &ev);
        app.sync_cursor();
    })
}

fn wire_click(app: &Rc<RefCell<App>>, canvas: &web::EventTarget) -> Listener {
    let app = app.clone();
    Listener::attach(canvas, "click", move |ev: web::MouseEvent| {
        let mut app = app.borrow_mut();
        let Some(event) = input::pointer_event(PointerKind::Click, &ev, &app.canvas) else {
            return;
        };
        let now_ms = app.now_ms();
        let effects = app.interaction.handle_pointer(&event, now_ms);
        app.apply_effects(&effects, &ev);
    })
}

fn wire_wheel(app: &Rc<RefCell<App>>, canvas: &web::EventTarget) -> Listener {
    let app = app.clone();
    Listener::attach(canvas, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        app.borrow_mut().orbit.zoom(ev.delta_y() as f32);
    })
}
