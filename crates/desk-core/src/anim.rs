//! Frame-driven animation tokens.
//!
//! Nothing here schedules itself: the host calls [`Animations::advance`] once
//! per display frame with a millisecond timestamp, and each token updates its
//! target and reports whether it is done. Tests drive the same path with
//! synthetic timestamps.

use crate::config::RevealParams;
use crate::scene::{ObjectId, Scene, SceneObject};
use fnv::FnvHashMap;
use glam::Vec3;

#[inline]
pub fn ease_out_cubic(progress: f32) -> f32 {
    1.0 - (1.0 - progress).powi(3)
}

/// Rising, spinning reveal of a hidden object.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTween {
    pub target: ObjectId,
    pub start_ms: f64,
    pub start_y: f32,
    pub end_y: f32,
    pub duration_ms: f64,
    pub spin_per_frame: f32,
}

impl RevealTween {
    pub fn new(target: ObjectId, start_ms: f64, params: &RevealParams) -> Self {
        Self {
            target,
            start_ms,
            start_y: params.start_y,
            end_y: params.end_y,
            duration_ms: params.duration_ms,
            spin_per_frame: params.spin_per_frame,
        }
    }

    /// Elapsed fraction clamped to [0, 1].
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    pub fn height_at(&self, now_ms: f64) -> f32 {
        let eased = ease_out_cubic(self.progress(now_ms));
        self.start_y + (self.end_y - self.start_y) * eased
    }

    /// Apply one frame. The spin is not eased and happens every frame.
    /// Returns true once progress has reached 1.
    pub fn step(&self, object: &mut SceneObject, now_ms: f64) -> bool {
        object.transform.position.y = self.height_at(now_ms);
        object.transform.rotation.y += self.spin_per_frame;
        self.progress(now_ms) >= 1.0
    }
}

/// Short scale "press" feedback on a clicked object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseToken {
    pub target: ObjectId,
    pub start_ms: f64,
    pub duration_ms: f64,
    /// Scale restored when the pulse ends.
    pub rest_scale: Vec3,
}

#[derive(Default, Debug)]
pub struct Animations {
    reveals: Vec<RevealTween>,
    pulses: FnvHashMap<ObjectId, PulseToken>,
}

impl Animations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a reveal and apply its first frame immediately. A reveal already
    /// running on the same object is left alone and `false` is returned.
    pub fn start_reveal(
        &mut self,
        scene: &mut Scene,
        target: ObjectId,
        now_ms: f64,
        params: &RevealParams,
    ) -> bool {
        if self.is_revealing(target) {
            return false;
        }
        let Some(object) = scene.get_mut(target) else {
            return false;
        };
        let tween = RevealTween::new(target, now_ms, params);
        log::info!("[reveal] start {}", object.name);
        if !tween.step(object, now_ms) {
            self.reveals.push(tween);
        }
        true
    }

    /// Scale `target` by `factor` for `duration_ms`. Re-pulsing replaces the
    /// running token but keeps its rest scale, so overlapping pulses always
    /// settle back to the scale the object had before the first one.
    pub fn start_pulse(
        &mut self,
        scene: &mut Scene,
        target: ObjectId,
        factor: f32,
        now_ms: f64,
        duration_ms: f64,
    ) {
        let Some(object) = scene.get_mut(target) else {
            return;
        };
        let rest_scale = self
            .pulses
            .get(&target)
            .map_or(object.transform.scale, |running| running.rest_scale);
        object.transform.scale = rest_scale * factor;
        self.pulses.insert(
            target,
            PulseToken {
                target,
                start_ms: now_ms,
                duration_ms,
                rest_scale,
            },
        );
    }

    /// Advance every token to `now_ms` and drop the finished ones.
    pub fn advance(&mut self, scene: &mut Scene, now_ms: f64) {
        self.reveals.retain(|tween| match scene.get_mut(tween.target) {
            Some(object) => {
                let done = tween.step(object, now_ms);
                if done {
                    log::info!("[reveal] finished {}", object.name);
                }
                !done
            }
            None => false,
        });
        self.pulses.retain(|_, token| {
            if now_ms - token.start_ms < token.duration_ms {
                return true;
            }
            if let Some(object) = scene.get_mut(token.target) {
                object.transform.scale = token.rest_scale;
            }
            false
        });
    }

    pub fn is_revealing(&self, target: ObjectId) -> bool {
        self.reveals.iter().any(|t| t.target == target)
    }

    pub fn reveal_count(&self) -> usize {
        self.reveals.len()
    }

    pub fn pulse(&self, target: ObjectId) -> Option<&PulseToken> {
        self.pulses.get(&target)
    }

    pub fn is_idle(&self) -> bool {
        self.reveals.is_empty() && self.pulses.is_empty()
    }
}
