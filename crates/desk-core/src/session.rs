use crate::anim::Animations;
use crate::camera::Camera;
use crate::config::InteractionConfig;
use crate::dispatch::Popup;
use crate::error::SceneResult;
use crate::gesture::{self, Effects, GestureContext, SessionState, Transition};
use crate::hover::CursorStyle;
use crate::input::PointerEvent;
use crate::scene::{ObjectId, Scene, SceneObject};
use crate::snapshot::{self, LightInstance, ObjectInstance};
use crate::win::WinMonitor;

/// Owns the scene, camera and the single interaction session.
///
/// Pointer events go through [`Interaction::handle_pointer`]; the host calls
/// [`Interaction::frame`] once per rendered frame after input for that frame
/// has been handled.
pub struct Interaction {
    pub scene: Scene,
    pub camera: Camera,
    pub config: InteractionConfig,
    state: SessionState,
    animations: Animations,
    win: Option<WinMonitor>,
}

impl Interaction {
    pub fn new(camera: Camera, scene: Scene, config: InteractionConfig) -> Self {
        log::info!(
            "[init] interaction ready with {} pickable objects",
            scene.pickables().len()
        );
        Self {
            scene,
            camera,
            config,
            state: SessionState::default(),
            animations: Animations::new(),
            win: None,
        }
    }

    /// Track `object` for the win condition.
    pub fn with_win_monitor(mut self, object: ObjectId) -> Self {
        self.win = Some(WinMonitor::new(object, self.config.win_threshold_x));
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn animations(&self) -> &Animations {
        &self.animations
    }

    pub fn win_monitor(&self) -> Option<&WinMonitor> {
        self.win.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn cursor(&self) -> CursorStyle {
        gesture::cursor_style(&self.state, &self.scene)
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent, now_ms: f64) -> Effects {
        let mut cx = GestureContext {
            scene: &mut self.scene,
            camera: &self.camera,
            animations: &mut self.animations,
            config: &self.config,
            now_ms,
        };
        let Transition { state, effects } = gesture::handle(self.state, event, &mut cx);
        self.state = state;
        effects
    }

    /// Per-frame interaction hook: advances running reveal and pulse tokens.
    pub fn update(&mut self, now_ms: f64) {
        self.animations.advance(&mut self.scene, now_ms);
    }

    pub fn check_win(&mut self) -> Option<Popup> {
        self.win.as_mut()?.check(&self.scene)
    }

    /// Update, then evaluate the win condition against the settled state.
    pub fn frame(&mut self, now_ms: f64) -> Option<Popup> {
        self.update(now_ms);
        self.check_win()
    }

    /// Add a pickable object after construction.
    pub fn register_pickable(&mut self, object: SceneObject) -> SceneResult<ObjectId> {
        let id = self.scene.add_pickable(object)?;
        log::info!("[init] registered pickable {:?}", id);
        Ok(id)
    }

    pub fn object_instances(&self) -> Vec<ObjectInstance> {
        snapshot::object_instances(&self.scene)
    }

    pub fn light_instances(&self) -> Vec<LightInstance> {
        snapshot::light_instances(&self.scene)
    }
}
