#![cfg(target_arch = "wasm32")]
use desk_core::layout::{self, DeskScene};
use desk_core::picking::Collider;
use desk_core::{snapshot, Camera, Interaction, InteractionConfig, ObjectKind, SceneObject};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod popup;

use app::App;
use constants::{CANVAS_ID, LOADING_FADE_DELAY_MS, LOADING_REMOVE_DELAY_MS, LOADING_SCREEN_ID};

/// A running page: the shared app state plus what must be torn down with it.
struct Running {
    app: Rc<RefCell<App>>,
    listeners: Vec<dom::Listener>,
    frame_loop: frame::FrameLoop,
}

thread_local! {
    static RUNNING: RefCell<Option<Running>> = const { RefCell::new(None) };
    /// Popup looked up by `show_story_popup` before the desk started; kept so
    /// its close button stays wired, and handed to the app on init.
    static DETACHED_POPUP: RefCell<Option<popup::StoryPopup>> = const { RefCell::new(None) };
}

fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    RUNNING.with(|running| {
        let running = running.borrow();
        let app = &running.as_ref()?.app;
        let mut app = app.try_borrow_mut().ok()?;
        Some(f(&mut app))
    })
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
}

async fn init() -> anyhow::Result<()> {
    if RUNNING.with(|r| r.borrow().is_some()) {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::required_element(&document, CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e))?;
    let popup = match DETACHED_POPUP.with(|p| p.borrow_mut().take()) {
        Some(popup) => popup,
        None => popup::StoryPopup::lookup(&document)?,
    };

    let DeskScene { scene, folder, .. } = layout::desk_scene()?;
    let interaction = Interaction::new(Camera::default(), scene, InteractionConfig::default())
        .with_win_monitor(folder);
    let app = Rc::new(RefCell::new(App::new(interaction, canvas, popup)));
    app.borrow_mut().resize();

    let mut listeners = events::pointer::wire_input_handlers(&app);
    listeners.push(events::keyboard::wire_global_keydown(&app, &window));
    listeners.push(wire_resize(&app, &window));
    let frame_loop = frame::start_loop(app.clone());

    fade_loading_screen(&document);
    log::info!("[init] desk ready");
    RUNNING.with(|r| {
        *r.borrow_mut() = Some(Running {
            app,
            listeners,
            frame_loop,
        })
    });
    Ok(())
}

fn wire_resize(app: &Rc<RefCell<App>>, window: &web::Window) -> dom::Listener {
    let app = app.clone();
    dom::Listener::attach(window, "resize", move |_ev: web::Event| {
        app.borrow_mut().resize();
    })
}

fn fade_loading_screen(document: &web::Document) {
    let Some(screen) = document.get_element_by_id(LOADING_SCREEN_ID) else {
        return;
    };
    dom::set_timeout(LOADING_FADE_DELAY_MS, move || {
        dom::set_style(&screen, "opacity", "0");
        dom::set_timeout(LOADING_REMOVE_DELAY_MS, move || {
            dom::set_style(&screen, "display", "none");
        });
    });
}

/// Show the story popup with the given title and text.
#[wasm_bindgen]
pub fn show_story_popup(title: &str, text: &str) -> Result<(), JsValue> {
    if with_app(|app| app.popup.show(title, text)).is_some() {
        return Ok(());
    }
    DETACHED_POPUP.with(|slot| -> Result<(), JsValue> {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            let document = dom::window_document().ok_or_else(|| js_error("no document"))?;
            *slot = Some(popup::StoryPopup::lookup(&document).map_err(js_error)?);
        }
        if let Some(popup) = slot.as_ref() {
            popup.show(title, text);
        }
        Ok(())
    })
}

/// Detach every listener and stop the frame loop.
#[wasm_bindgen]
pub fn cleanup() {
    let Some(running) = RUNNING.with(|r| r.borrow_mut().take()) else {
        return;
    };
    let Running {
        app,
        listeners,
        frame_loop,
    } = running;
    frame_loop.stop();
    log::info!("[init] removing {} listeners", listeners.len());
    drop(listeners);
    drop(app);
}

/// Per-object instance data, `snapshot::OBJECT_INSTANCE_FLOATS` floats each.
#[wasm_bindgen]
pub fn scene_snapshot() -> js_sys::Float32Array {
    let instances = with_app(|app| app.interaction.object_instances()).unwrap_or_default();
    js_sys::Float32Array::from(snapshot::as_floats(&instances))
}

/// Per-light data, `snapshot::LIGHT_INSTANCE_FLOATS` floats each.
#[wasm_bindgen]
pub fn light_snapshot() -> js_sys::Float32Array {
    let lights = with_app(|app| app.interaction.light_instances()).unwrap_or_default();
    js_sys::Float32Array::from(snapshot::as_floats(&lights))
}

#[wasm_bindgen]
pub fn camera_eye() -> Vec<f32> {
    with_app(|app| app.interaction.camera.eye.to_array().to_vec()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn camera_target() -> Vec<f32> {
    with_app(|app| app.interaction.camera.target.to_array().to_vec()).unwrap_or_default()
}

/// Object names in snapshot order.
#[wasm_bindgen]
pub fn object_names() -> js_sys::Array {
    let names = js_sys::Array::new();
    with_app(|app| {
        for object in app.interaction.scene.objects() {
            names.push(&JsValue::from_str(&object.name));
        }
    });
    names
}

/// Add a plain draggable box to the running scene; returns its snapshot index.
#[wasm_bindgen]
pub fn register_prop(
    name: &str,
    x: f32,
    y: f32,
    z: f32,
    width: f32,
    height: f32,
    depth: f32,
) -> Result<u32, JsValue> {
    let object = SceneObject::new(name, ObjectKind::Prop, Collider::cuboid(width, height, depth))
        .at(Vec3::new(x, y, z));
    let id = with_app(|app| app.interaction.register_pickable(object))
        .ok_or_else(|| js_error("desk not initialized"))?
        .map_err(js_error)?;
    Ok(id.0 as u32)
}
