// Host-side tests for per-kind click behaviour: case file, patterned box and lamp.

use desk_core::anim::Animations;
use desk_core::constants::{CASE_FILE_TITLE, REVEAL_TITLE};
use desk_core::dispatch::{self, cycle_lamp};
use desk_core::layout::{self, DeskScene, BOX_TEXT, FOLDER_TEXT};
use desk_core::picking::Collider;
use desk_core::scene::{Brightness, CaseFile};
use desk_core::{InteractionConfig, ObjectId, ObjectKind, Scene, SceneObject};

fn desk() -> DeskScene {
    layout::desk_scene().unwrap()
}

fn brightness(scene: &Scene, lamp: ObjectId) -> Brightness {
    match &scene.get(lamp).unwrap().kind {
        ObjectKind::Lamp(lamp) => lamp.brightness,
        other => panic!("not a lamp: {:?}", other),
    }
}

#[test]
fn case_file_opens_its_narrative() {
    let mut desk = desk();
    let mut anims = Animations::new();
    let config = InteractionConfig::default();
    let popup = dispatch::dispatch(desk.folder, &mut desk.scene, &mut anims, &config, 0.0).unwrap();
    assert_eq!(popup.title, CASE_FILE_TITLE);
    assert_eq!(popup.body, FOLDER_TEXT);
}

#[test]
fn case_file_without_narrative_is_silent() {
    let mut scene = Scene::new();
    let blank = scene
        .add_pickable(SceneObject::new(
            "blank",
            ObjectKind::CaseFile(CaseFile::default()),
            Collider::cuboid(1.0, 0.1, 1.0),
        ))
        .unwrap();
    let mut anims = Animations::new();
    let config = InteractionConfig::default();
    assert!(dispatch::dispatch(blank, &mut scene, &mut anims, &config, 0.0).is_none());
}

#[test]
fn plain_props_do_nothing() {
    let mut desk = desk();
    let mut anims = Animations::new();
    let config = InteractionConfig::default();
    let before = desk.scene.get(desk.coffee_tin).unwrap().transform;
    let popup =
        dispatch::dispatch(desk.coffee_tin, &mut desk.scene, &mut anims, &config, 0.0);
    assert!(popup.is_none());
    assert_eq!(desk.scene.get(desk.coffee_tin).unwrap().transform, before);
    assert!(anims.is_idle());
}

#[test]
fn patterned_box_reveals_its_contents_once() {
    let mut desk = desk();
    let mut anims = Animations::new();
    let config = InteractionConfig::default();
    assert!(!desk.scene.get(desk.amulet).unwrap().visible);

    let popup = dispatch::dispatch(desk.patterned_box, &mut desk.scene, &mut anims, &config, 0.0)
        .unwrap();
    assert_eq!(popup.title, REVEAL_TITLE);
    assert_eq!(popup.body, BOX_TEXT);
    let amulet = desk.scene.get(desk.amulet).unwrap();
    assert!(amulet.visible);
    assert!((amulet.transform.position.y + 0.3).abs() < 1e-6);
    assert!(anims.is_revealing(desk.amulet));

    let again = dispatch::dispatch(desk.patterned_box, &mut desk.scene, &mut anims, &config, 5.0);
    assert!(again.is_none());
    assert_eq!(anims.reveal_count(), 1);
}

#[test]
fn lamp_cycles_through_three_levels() {
    let mut desk = desk();
    let mut anims = Animations::new();
    let config = InteractionConfig::default();
    let light = desk.lamp_light;
    assert_eq!(brightness(&desk.scene, desk.lamp), Brightness::Bright);

    let expected = [
        (Brightness::Dim, 3.0, 0.4),
        (Brightness::Off, 0.0, 0.0),
        (Brightness::Bright, 8.0, 1.0),
    ];
    for (i, (state, light_intensity, bulb)) in expected.into_iter().enumerate() {
        let now = i as f64 * 200.0;
        let next = cycle_lamp(desk.lamp, &mut desk.scene, &mut anims, &config, now).unwrap();
        assert_eq!(next, state);
        assert_eq!(desk.scene.light(light).unwrap().intensity, light_intensity);
        match &desk.scene.get(desk.lamp).unwrap().kind {
            ObjectKind::Lamp(lamp) => assert_eq!(lamp.bulb.intensity, bulb),
            other => panic!("not a lamp: {:?}", other),
        }
    }
}

#[test]
fn six_lamp_clicks_return_to_the_start() {
    let mut desk = desk();
    let mut anims = Animations::new();
    let config = InteractionConfig::default();
    let start = brightness(&desk.scene, desk.lamp);
    for i in 0..6 {
        let popup =
            dispatch::dispatch(desk.lamp, &mut desk.scene, &mut anims, &config, i as f64);
        assert!(popup.is_none());
    }
    assert_eq!(brightness(&desk.scene, desk.lamp), start);
}

#[test]
fn lamp_click_pulses_up_and_settles() {
    let mut desk = desk();
    let mut anims = Animations::new();
    let config = InteractionConfig::default();
    dispatch::dispatch(desk.lamp, &mut desk.scene, &mut anims, &config, 0.0);
    let scale = desk.scene.get(desk.lamp).unwrap().transform.scale;
    assert!((scale.x - 1.1).abs() < 1e-6);
    anims.advance(&mut desk.scene, 150.0);
    let scale = desk.scene.get(desk.lamp).unwrap().transform.scale;
    assert!((scale.x - 1.0).abs() < 1e-6);
}

#[test]
fn unknown_target_is_ignored() {
    let mut desk = desk();
    let mut anims = Animations::new();
    let config = InteractionConfig::default();
    let popup = dispatch::dispatch(ObjectId(999), &mut desk.scene, &mut anims, &config, 0.0);
    assert!(popup.is_none());
}
