use crate::popup::StoryPopup;
use desk_core::{Effect, Interaction, OrbitController, Popup};
use glam::Vec2;
use instant::Instant;
use web_sys as web;

/// Everything the listeners and the frame loop share.
pub struct App {
    pub interaction: Interaction,
    pub orbit: OrbitController,
    pub canvas: web::HtmlCanvasElement,
    pub popup: StoryPopup,
    /// Last client position while a press on empty space orbits the camera.
    pub orbit_anchor: Option<Vec2>,
    started: Instant,
}

impl App {
    pub fn new(
        interaction: Interaction,
        canvas: web::HtmlCanvasElement,
        popup: StoryPopup,
    ) -> Self {
        let orbit = OrbitController::from_camera(&interaction.camera);
        Self {
            interaction,
            orbit,
            canvas,
            popup,
            orbit_anchor: None,
            started: Instant::now(),
        }
    }

    /// Milliseconds since start; the clock every animation is driven by.
    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    pub fn apply_effects(&self, effects: &[Effect], ev: &web::Event) {
        for effect in effects {
            match effect {
                Effect::PreventDefault => ev.prevent_default(),
                Effect::ShowPopup(popup) => self.show_popup(popup),
            }
        }
    }

    pub fn show_popup(&self, popup: &Popup) {
        self.popup.show(&popup.title, &popup.body);
    }

    pub fn sync_cursor(&self) {
        let css = self.interaction.cursor().as_css();
        _ = self.canvas.style().set_property("cursor", css);
    }

    pub fn resize(&mut self) {
        crate::dom::sync_canvas_backing_size(&self.canvas);
        let rect = self.canvas.get_bounding_client_rect();
        self.interaction
            .camera
            .set_viewport(rect.width() as f32, rect.height() as f32);
    }

    /// One rendered frame: settle the orbit, then run the interaction hook.
    pub fn frame(&mut self) {
        let now_ms = self.now_ms();
        self.orbit.update();
        self.orbit.apply(&mut self.interaction.camera);
        if let Some(popup) = self.interaction.frame(now_ms) {
            self.show_popup(&popup);
        }
    }
}
