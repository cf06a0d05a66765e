use glam::Vec3;

// Shared interaction tuning constants used by the core and the web frontend.

// Desk surface
pub const DESK_HALF_X: f32 = 5.5; // clamp range for dragged props along X
pub const DESK_HALF_Z: f32 = 3.5; // clamp range for dragged props along Z
pub const PICKUP_LIFT: f32 = 0.1; // raise applied on grab for "picked up" feedback
pub const DEFAULT_RESTING_HEIGHT: f32 = 0.2; // used when no resting height is cached

// Pressing and releasing within this distance (normalized pointer units) still counts as a click
pub const CLICK_SLOP_NDC: f32 = 0.01;

// Hover highlight
pub const HOVER_ACCENT_HEX: u32 = 0x443322;
pub const HOVER_INTENSITY: f32 = 0.3;

// Click pulse
pub const CLICK_PULSE_SCALE: f32 = 0.95;
pub const LAMP_PULSE_SCALE: f32 = 1.1;
pub const PULSE_DURATION_MS: f64 = 100.0;

// Hidden artifact reveal
pub const REVEAL_DURATION_MS: f64 = 1500.0;
pub const REVEAL_START_Y: f32 = -0.3;
pub const REVEAL_END_Y: f32 = 1.2;
pub const REVEAL_SPIN_PER_FRAME: f32 = 0.02; // radians, applied every frame regardless of easing

// Win condition: the case file slid far enough toward the desk centre
pub const WIN_THRESHOLD_X: f32 = -0.5;

// Lamp levels: (light intensity, bulb emissive intensity, bulb emissive colour)
pub const LAMP_OFF: (f32, f32, u32) = (0.0, 0.0, 0x000000);
pub const LAMP_DIM: (f32, f32, u32) = (3.0, 0.4, 0xff8800);
pub const LAMP_BRIGHT: (f32, f32, u32) = (8.0, 1.0, 0xffaa00);

// Camera
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 6.0, 12.0);
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;

// Orbit
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 20.0;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI / 2.2; // never look from below the desk
pub const ORBIT_ZOOM_STEP: f32 = 0.95;

// Narrative
pub const CASE_FILE_TITLE: &str = "Case File Opened";
pub const REVEAL_TITLE: &str = "Hidden Artifact Discovered!";
pub const WIN_TITLE: &str = "The Gishwati Mystery";
pub const WIN_TEXT: &str = "You uncover a handwritten note: 'Meet at the Volcanoes National Park, 23:00. \
The mist will hide us. Bring the Imigongo map.' \
The plot thickens in the heart of Rwanda...";

/// Convert a packed `0xRRGGBB` colour into normalized RGB.
#[inline]
pub fn rgb_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}
