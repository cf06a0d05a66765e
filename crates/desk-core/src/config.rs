use crate::constants::*;
use glam::Vec3;

/// Axis-aligned rectangle on the desk plane that dragged props are clamped into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeskBounds {
    pub half_x: f32,
    pub half_z: f32,
}

impl DeskBounds {
    /// Clamp the horizontal coordinates independently; Y passes through.
    #[inline]
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(-self.half_x, self.half_x),
            p.y,
            p.z.clamp(-self.half_z, self.half_z),
        )
    }
}

impl Default for DeskBounds {
    fn default() -> Self {
        Self {
            half_x: DESK_HALF_X,
            half_z: DESK_HALF_Z,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RevealParams {
    pub start_y: f32,
    pub end_y: f32,
    pub duration_ms: f64,
    pub spin_per_frame: f32,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            start_y: REVEAL_START_Y,
            end_y: REVEAL_END_Y,
            duration_ms: REVEAL_DURATION_MS,
            spin_per_frame: REVEAL_SPIN_PER_FRAME,
        }
    }
}

/// Runtime tuning for the interaction session. Defaults come from `constants`.
#[derive(Clone, Debug)]
pub struct InteractionConfig {
    pub bounds: DeskBounds,
    pub pickup_lift: f32,
    pub default_resting_height: f32,
    pub click_slop_ndc: f32,
    pub hover_accent: Vec3,
    pub hover_intensity: f32,
    pub click_pulse_scale: f32,
    pub lamp_pulse_scale: f32,
    pub pulse_duration_ms: f64,
    pub reveal: RevealParams,
    pub win_threshold_x: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            bounds: DeskBounds::default(),
            pickup_lift: PICKUP_LIFT,
            default_resting_height: DEFAULT_RESTING_HEIGHT,
            click_slop_ndc: CLICK_SLOP_NDC,
            hover_accent: rgb_hex(HOVER_ACCENT_HEX),
            hover_intensity: HOVER_INTENSITY,
            click_pulse_scale: CLICK_PULSE_SCALE,
            lamp_pulse_scale: LAMP_PULSE_SCALE,
            pulse_duration_ms: PULSE_DURATION_MS,
            reveal: RevealParams::default(),
            win_threshold_x: WIN_THRESHOLD_X,
        }
    }
}
