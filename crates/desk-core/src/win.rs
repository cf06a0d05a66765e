use crate::constants::{WIN_TEXT, WIN_TITLE};
use crate::dispatch::Popup;
use crate::scene::{ObjectId, Scene};

/// One-shot check that the tracked object has been slid past a threshold on X.
#[derive(Clone, Debug)]
pub struct WinMonitor {
    pub tracked: ObjectId,
    pub threshold_x: f32,
    fired: bool,
}

impl WinMonitor {
    pub fn new(tracked: ObjectId, threshold_x: f32) -> Self {
        Self {
            tracked,
            threshold_x,
            fired: false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Evaluate once per rendered frame. Fires the narrative popup the first
    /// time `position.x > threshold_x` holds and never evaluates again.
    pub fn check(&mut self, scene: &Scene) -> Option<Popup> {
        if self.fired {
            return None;
        }
        let object = scene.get(self.tracked)?;
        if object.transform.position.x > self.threshold_x {
            self.fired = true;
            log::info!("[win] {} crossed x={:.2}", object.name, self.threshold_x);
            return Some(Popup::new(WIN_TITLE, WIN_TEXT));
        }
        None
    }
}
