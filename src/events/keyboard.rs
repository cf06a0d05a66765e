use crate::app::App;
use crate::dom::Listener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Escape closes the story popup.
pub fn wire_global_keydown(app: &Rc<RefCell<App>>, window: &web::Window) -> Listener {
    let app = app.clone();
    Listener::attach(window, "keydown", move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            let app = app.borrow();
            if app.popup.is_visible() {
                app.popup.hide();
                log::info!("[popup] closed with Escape");
            }
        }
    })
}
