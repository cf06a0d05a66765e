//! Pointer gesture classification.
//!
//! One pointer stream is split into hover, drag and click. The session state
//! is a plain value: [`handle`] takes the current state and an event and
//! returns the next state together with the side effects the host has to
//! perform, so the whole state machine runs without a browser.

use crate::anim::Animations;
use crate::camera::Camera;
use crate::config::InteractionConfig;
use crate::dispatch::{self, Popup};
use crate::drag::{self, DragSession};
use crate::hover::{self, CursorStyle};
use crate::input::{PointerButton, PointerEvent};
use crate::picking;
use crate::scene::{ObjectId, Scene};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Hovering(ObjectId),
    Dragging(DragSession),
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SessionState {
    pub mode: Mode,
    /// Set when a drag that actually moved is released; the click the
    /// browser delivers right after that release is swallowed.
    pub swallow_click: bool,
}

impl SessionState {
    pub fn hovered(&self) -> Option<ObjectId> {
        match self.mode {
            Mode::Hovering(id) => Some(id),
            _ => None,
        }
    }

    pub fn grabbed(&self) -> Option<&DragSession> {
        match &self.mode {
            Mode::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, Mode::Dragging(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ShowPopup(Popup),
    /// Suppress the browser's default drag behaviour for this event.
    PreventDefault,
}

pub type Effects = SmallVec<[Effect; 2]>;

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: SessionState,
    pub effects: Effects,
}

/// Everything a gesture may read or touch besides the session state.
pub struct GestureContext<'a> {
    pub scene: &'a mut Scene,
    pub camera: &'a Camera,
    pub animations: &'a mut Animations,
    pub config: &'a InteractionConfig,
    pub now_ms: f64,
}

pub fn handle(
    state: SessionState,
    event: &PointerEvent,
    cx: &mut GestureContext<'_>,
) -> Transition {
    let mut effects = Effects::new();
    let state = match *event {
        PointerEvent::Move { ndc } => on_move(state, ndc, cx),
        PointerEvent::Down { ndc, button } => on_down(state, ndc, button, cx, &mut effects),
        PointerEvent::Up { .. } => on_up(state, cx),
        PointerEvent::Click { ndc, button } => on_click(state, ndc, button, cx, &mut effects),
    };
    Transition { state, effects }
}

fn on_move(mut state: SessionState, ndc: Vec2, cx: &mut GestureContext<'_>) -> SessionState {
    match state.mode {
        Mode::Dragging(mut session) => {
            let ray = cx.camera.ray_from_ndc(ndc);
            if let Some(object) = cx.scene.get_mut(session.object) {
                drag::drag_to(object, &mut session, &ray, ndc, cx.config);
            }
            state.mode = Mode::Dragging(session);
        }
        Mode::Idle | Mode::Hovering(_) => {
            let hit = picking::pick(ndc, cx.camera, cx.scene).map(|h| h.object);
            state.mode = retarget_hover(state.hovered(), hit, cx);
        }
    }
    state
}

/// Leave the old target and enter the new one, only on an actual change.
fn retarget_hover(
    current: Option<ObjectId>,
    hit: Option<ObjectId>,
    cx: &mut GestureContext<'_>,
) -> Mode {
    if current != hit {
        if let Some(old) = current.and_then(|id| cx.scene.get_mut(id)) {
            hover::leave(old);
        }
        if let Some(new) = hit.and_then(|id| cx.scene.get_mut(id)) {
            hover::enter(new, cx.config);
        }
    }
    hit.map_or(Mode::Idle, Mode::Hovering)
}

fn on_down(
    mut state: SessionState,
    ndc: Vec2,
    button: PointerButton,
    cx: &mut GestureContext<'_>,
    effects: &mut Effects,
) -> SessionState {
    if button != PointerButton::Primary || state.is_dragging() {
        return state;
    }
    state.swallow_click = false;

    let ray = cx.camera.ray_from_ndc(ndc);
    let Some(hit) = picking::pick_ray(&ray, cx.scene, cx.scene.pickables()) else {
        return state;
    };
    match cx.scene.get(hit.object) {
        Some(object) if !object.kind.is_click_only() => {}
        _ => return state,
    }

    if let Some(hovered) = state.hovered().and_then(|id| cx.scene.get_mut(id)) {
        hover::leave(hovered);
    }
    let Some(object) = cx.scene.get_mut(hit.object) else {
        return state;
    };
    let session = drag::begin(object, &ray, ndc, cx.config);
    state.mode = Mode::Dragging(session);
    effects.push(Effect::PreventDefault);
    state
}

fn on_up(mut state: SessionState, cx: &mut GestureContext<'_>) -> SessionState {
    if let Mode::Dragging(session) = state.mode {
        if let Some(object) = cx.scene.get_mut(session.object) {
            drag::end(object, &session, cx.config);
        }
        state.swallow_click = session.moved;
        state.mode = Mode::Idle;
    }
    state
}

fn on_click(
    mut state: SessionState,
    ndc: Vec2,
    button: PointerButton,
    cx: &mut GestureContext<'_>,
    effects: &mut Effects,
) -> SessionState {
    if button != PointerButton::Primary || state.is_dragging() {
        return state;
    }
    if std::mem::take(&mut state.swallow_click) {
        log::debug!("[click] swallowed after drag");
        return state;
    }
    let Some(hit) = picking::pick(ndc, cx.camera, cx.scene) else {
        return state;
    };
    cx.animations.start_pulse(
        cx.scene,
        hit.object,
        cx.config.click_pulse_scale,
        cx.now_ms,
        cx.config.pulse_duration_ms,
    );
    let popup = dispatch::dispatch(hit.object, cx.scene, cx.animations, cx.config, cx.now_ms);
    if let Some(popup) = popup {
        effects.push(Effect::ShowPopup(popup));
    }
    state
}

/// Cursor for the current state: grabbing while dragging, pointer over
/// click-only objects, grab over draggable ones.
pub fn cursor_style(state: &SessionState, scene: &Scene) -> CursorStyle {
    match state.mode {
        Mode::Dragging(_) => CursorStyle::Grabbing,
        Mode::Hovering(id) => match scene.get(id) {
            Some(object) if object.kind.is_click_only() => CursorStyle::Pointer,
            Some(_) => CursorStyle::Grab,
            None => CursorStyle::Default,
        },
        Mode::Idle => CursorStyle::Default,
    }
}
