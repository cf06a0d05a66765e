use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element the page must provide.
pub fn required_element(
    document: &web::Document,
    element_id: &str,
) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn set_style(element: &web::Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<web::HtmlElement>() {
        _ = el.style().set_property(property, value);
    }
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let callback = Closure::once_into_js(f);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    }
}

/// An installed event listener. Dropping it removes the listener again.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    function: js_sys::Function,
    _closure: Box<dyn std::any::Any>,
}

impl Listener {
    pub fn attach<E>(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> Self
    where
        E: 'static,
        dyn FnMut(E): WasmClosure,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        let function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        _ = target.add_event_listener_with_callback(kind, &function);
        Self {
            target: target.clone(),
            kind,
            function,
            _closure: Box::new(closure),
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, &self.function);
    }
}
