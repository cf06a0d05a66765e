// Host-side tests for the flat buffers handed to the renderer.

use desk_core::anim::Animations;
use desk_core::dispatch;
use desk_core::layout;
use desk_core::snapshot::{self, LIGHT_INSTANCE_FLOATS, OBJECT_INSTANCE_FLOATS};
use desk_core::InteractionConfig;

#[test]
fn instance_layouts_have_fixed_widths() {
    assert_eq!(OBJECT_INSTANCE_FLOATS, 28);
    assert_eq!(LIGHT_INSTANCE_FLOATS, 8);
}

#[test]
fn one_instance_per_object_in_scene_order() {
    let desk = layout::desk_scene().unwrap();
    let instances = snapshot::object_instances(&desk.scene);
    assert_eq!(instances.len(), desk.scene.objects().len());
    assert_eq!(
        snapshot::as_floats(&instances).len(),
        instances.len() * OBJECT_INSTANCE_FLOATS
    );

    let folder = &instances[desk.folder.0];
    assert_eq!(&folder.model[3][..3], &[-3.0, 0.2, 0.0]);
    assert_eq!(folder.visible, 1.0);

    let lights = snapshot::light_instances(&desk.scene);
    assert_eq!(
        snapshot::as_floats(&lights).len(),
        desk.scene.lights().len() * LIGHT_INSTANCE_FLOATS
    );
    assert_eq!(lights[desk.lamp_light.0].intensity, 8.0);
}

#[test]
fn hidden_amulet_is_flagged_until_revealed() {
    let mut desk = layout::desk_scene().unwrap();
    let before = snapshot::object_instances(&desk.scene);
    assert_eq!(before[desk.amulet.0].visible, 0.0);

    let mut anims = Animations::new();
    let config = InteractionConfig::default();
    dispatch::dispatch(desk.patterned_box, &mut desk.scene, &mut anims, &config, 0.0);
    let after = snapshot::object_instances(&desk.scene);
    assert_eq!(after[desk.amulet.0].visible, 1.0);
}

#[test]
fn only_the_lamp_carries_a_glow() {
    let desk = layout::desk_scene().unwrap();
    let instances = snapshot::object_instances(&desk.scene);
    for (i, instance) in instances.iter().enumerate() {
        if i == desk.lamp.0 {
            assert_eq!(instance.glow[3], 1.0);
            assert_eq!(instance.glow[0], 1.0);
        } else {
            assert_eq!(instance.glow, [0.0; 4]);
        }
    }
}
