// Host-side tests for frame-driven reveal and pulse animations.

use desk_core::anim::{ease_out_cubic, Animations, RevealTween};
use desk_core::config::RevealParams;
use desk_core::picking::Collider;
use desk_core::{ObjectKind, Scene, SceneObject};
use glam::Vec3;

fn scene_with_prop() -> (Scene, desk_core::ObjectId) {
    let mut scene = Scene::new();
    let id = scene
        .add(SceneObject::new("prop", ObjectKind::Prop, Collider::Sphere { radius: 0.4 }))
        .unwrap();
    (scene, id)
}

#[test]
fn ease_out_cubic_endpoints_and_shape() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    assert!(ease_out_cubic(0.25) > 0.25);
}

#[test]
fn reveal_height_samples() {
    let (_, id) = scene_with_prop();
    let tween = RevealTween::new(id, 1000.0, &RevealParams::default());
    assert!((tween.height_at(1000.0) + 0.3).abs() < 1e-6);
    // Cubic ease-out at t = 0.5 is 0.875 of the way: -0.3 + 1.5 * 0.875.
    // A linear-looking 0.825 is not what the curve gives.
    let mid = tween.height_at(1750.0);
    assert!((mid - 1.0125).abs() < 1e-4);
    // Eased, so already past the linear midpoint.
    assert!(mid > 0.45);
    assert!((tween.height_at(2500.0) - 1.2).abs() < 1e-6);
    assert!((tween.height_at(9000.0) - 1.2).abs() < 1e-6);
}

#[test]
fn zero_duration_reveal_completes_immediately() {
    let (mut scene, id) = scene_with_prop();
    let params = RevealParams {
        duration_ms: 0.0,
        ..RevealParams::default()
    };
    let mut anims = Animations::new();
    assert!(anims.start_reveal(&mut scene, id, 0.0, &params));
    assert!(!anims.is_revealing(id));
    assert!((scene.get(id).unwrap().transform.position.y - 1.2).abs() < 1e-6);
}

#[test]
fn reveal_spins_every_frame_and_stops_at_the_end() {
    let (mut scene, id) = scene_with_prop();
    let mut anims = Animations::new();
    assert!(anims.start_reveal(&mut scene, id, 0.0, &RevealParams::default()));
    assert!(!anims.start_reveal(&mut scene, id, 1.0, &RevealParams::default()));

    let mut frames = 1;
    let mut now = 0.0;
    while anims.is_revealing(id) {
        now += 16.0;
        anims.advance(&mut scene, now);
        frames += 1;
        assert!(frames < 200, "reveal never finished");
    }
    let object = scene.get(id).unwrap();
    assert!((object.transform.position.y - 1.2).abs() < 1e-6);
    assert!((object.transform.rotation.y - 0.02 * frames as f32).abs() < 1e-4);

    anims.advance(&mut scene, now + 100.0);
    let spin = scene.get(id).unwrap().transform.rotation.y;
    assert!((spin - 0.02 * frames as f32).abs() < 1e-4);
}

#[test]
fn pulse_restores_scale_after_duration() {
    let (mut scene, id) = scene_with_prop();
    let mut anims = Animations::new();
    anims.start_pulse(&mut scene, id, 0.95, 0.0, 100.0);
    assert_eq!(scene.get(id).unwrap().transform.scale, Vec3::splat(0.95));
    anims.advance(&mut scene, 99.0);
    assert_eq!(scene.get(id).unwrap().transform.scale, Vec3::splat(0.95));
    anims.advance(&mut scene, 100.0);
    assert_eq!(scene.get(id).unwrap().transform.scale, Vec3::ONE);
    assert!(anims.is_idle());
}

#[test]
fn overlapping_pulses_settle_at_the_original_scale() {
    let (mut scene, id) = scene_with_prop();
    let mut anims = Animations::new();
    anims.start_pulse(&mut scene, id, 0.95, 0.0, 100.0);
    anims.start_pulse(&mut scene, id, 1.1, 50.0, 100.0);
    let scale = scene.get(id).unwrap().transform.scale;
    assert!((scale.x - 1.1).abs() < 1e-6);
    assert_eq!(anims.pulse(id).unwrap().rest_scale, Vec3::ONE);

    anims.advance(&mut scene, 120.0);
    assert!(anims.pulse(id).is_some());
    anims.advance(&mut scene, 150.0);
    assert_eq!(scene.get(id).unwrap().transform.scale, Vec3::ONE);
}
