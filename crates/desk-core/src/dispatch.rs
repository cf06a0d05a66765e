use crate::anim::Animations;
use crate::config::InteractionConfig;
use crate::constants::{CASE_FILE_TITLE, REVEAL_TITLE};
use crate::scene::{Brightness, CaseFile, Glow, ObjectId, ObjectKind, PatternedBox, Scene};

/// Narrative popup request for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub body: String,
}

impl Popup {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Run the kind-specific click behaviour of `target`.
pub fn dispatch(
    target: ObjectId,
    scene: &mut Scene,
    animations: &mut Animations,
    config: &InteractionConfig,
    now_ms: f64,
) -> Option<Popup> {
    let action = {
        let object = scene.get(target)?;
        log::info!("[click] examined {} ({})", object.name, object.kind.tag());
        match &object.kind {
            ObjectKind::CaseFile(CaseFile {
                narrative: Some(text),
                ..
            }) => Action::Open(text.clone()),
            ObjectKind::PatternedBox(PatternedBox {
                hidden: Some(hidden),
                narrative: Some(text),
            }) => Action::Reveal(*hidden, text.clone()),
            ObjectKind::Lamp(_) => Action::CycleLamp,
            _ => Action::Nothing,
        }
    };
    match action {
        Action::Open(text) => {
            log::info!("[click] opened case file");
            Some(Popup::new(CASE_FILE_TITLE, text))
        }
        Action::Reveal(hidden, text) => {
            reveal_hidden(hidden, text, scene, animations, config, now_ms)
        }
        Action::CycleLamp => {
            cycle_lamp(target, scene, animations, config, now_ms);
            None
        }
        Action::Nothing => None,
    }
}

enum Action {
    Open(String),
    Reveal(ObjectId, String),
    CycleLamp,
    Nothing,
}

/// Show the hidden object and start its reveal. An object that is already
/// visible is left untouched.
fn reveal_hidden(
    hidden: ObjectId,
    text: String,
    scene: &mut Scene,
    animations: &mut Animations,
    config: &InteractionConfig,
    now_ms: f64,
) -> Option<Popup> {
    let object = scene.get_mut(hidden)?;
    if object.visible {
        log::debug!("[reveal] {} already visible", object.name);
        return None;
    }
    object.visible = true;
    animations.start_reveal(scene, hidden, now_ms, &config.reveal);
    Some(Popup::new(REVEAL_TITLE, text))
}

/// Step the lamp one state along Bright -> Dim -> Off and apply the light and
/// bulb levels for the new state. Returns the new state.
pub fn cycle_lamp(
    target: ObjectId,
    scene: &mut Scene,
    animations: &mut Animations,
    config: &InteractionConfig,
    now_ms: f64,
) -> Option<Brightness> {
    let brightness = {
        let object = scene.get_mut(target)?;
        let ObjectKind::Lamp(lamp) = &mut object.kind else {
            return None;
        };
        lamp.brightness = lamp.brightness.next();
        lamp.brightness
    };
    set_lamp(scene, target, brightness);
    animations.start_pulse(
        scene,
        target,
        config.lamp_pulse_scale,
        now_ms,
        config.pulse_duration_ms,
    );
    log::info!("[lamp] now {:?}", brightness);
    Some(brightness)
}

/// Force a lamp into `brightness`, writing light intensity and bulb glow.
pub fn set_lamp(scene: &mut Scene, target: ObjectId, brightness: Brightness) {
    let levels = brightness.levels();
    let light = match scene.get_mut(target).map(|o| &mut o.kind) {
        Some(ObjectKind::Lamp(lamp)) => {
            lamp.brightness = brightness;
            lamp.bulb = Glow {
                emissive: levels.emissive,
                intensity: levels.emissive_intensity,
            };
            lamp.light
        }
        _ => return,
    };
    if let Some(light) = scene.light_mut(light) {
        light.intensity = levels.light_intensity;
    }
}
