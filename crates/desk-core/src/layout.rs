//! Default desk vignette: the props, their narratives and the lights.

use crate::constants::rgb_hex;
use crate::error::SceneResult;
use crate::picking::Collider;
use crate::scene::{
    Brightness, CaseFile, Glow, LampFixture, LightId, Material, ObjectId, ObjectKind,
    PatternedBox, Scene, SceneLight, SceneObject,
};
use glam::Vec3;
use std::f32::consts::PI;

pub const FOLDER_TEXT: &str = "THE GISHWATI MYSTERY\n\nAgent's Note:\n'The witness spoke of strange lights near Lake Kivu. \
The Imigongo box may hold the key. Check the traditional patterns - they're not just art, they're a map.'\n\n- Bureau Chief K.";

pub const BOX_TEXT: &str = "A golden amulet emerges from the Imigongo box!\n\nInscription: 'Ubumwe - Unity'\n\n\
This ancient artifact was said to guide travelers through the mist-covered mountains of Volcanoes National Park. \
The patterns match the missing map coordinates.";

const DESK_LEGS: [[f32; 3]; 4] = [
    [-5.0, -1.4, 3.5],
    [5.0, -1.4, 3.5],
    [-5.0, -1.4, -3.5],
    [5.0, -1.4, -3.5],
];

/// The assembled scene plus handles to the objects the session cares about.
pub struct DeskScene {
    pub scene: Scene,
    pub folder: ObjectId,
    pub note: ObjectId,
    pub patterned_box: ObjectId,
    pub amulet: ObjectId,
    pub coffee_tin: ObjectId,
    pub lamp: ObjectId,
    pub lamp_light: LightId,
}

pub fn desk_scene() -> SceneResult<DeskScene> {
    let mut scene = Scene::new();

    add_lights(&mut scene);
    let desk_wood = Material::solid(0x2b1810);
    scene.add(
        SceneObject::new("desk", ObjectKind::Prop, Collider::cuboid(12.0, 0.3, 8.0))
            .with_material(desk_wood),
    )?;
    for (i, leg) in DESK_LEGS.iter().enumerate() {
        let name = format!("desk-leg-{i}");
        scene.add(
            SceneObject::new(name, ObjectKind::Prop, Collider::cylinder(0.2, 2.5))
                .at(Vec3::from_array(*leg))
                .with_material(desk_wood),
        )?;
    }

    // The note lies just under the folder; sliding the folder away uncovers it.
    let note = scene.add(
        SceneObject::new("note", ObjectKind::Prop, Collider::cuboid(2.0, 0.01, 2.5))
            .at(Vec3::new(-3.0, 0.16, 0.0))
            .with_material(Material::solid(0xfffff0)),
    )?;
    let folder = scene.add_pickable(
        SceneObject::new(
            "folder",
            ObjectKind::CaseFile(CaseFile {
                narrative: Some(FOLDER_TEXT.to_string()),
            }),
            Collider::cuboid(2.5, 0.05, 3.5),
        )
        .at(Vec3::new(-3.0, 0.2, 0.0))
        .with_material(Material::solid(0xd4a574)),
    )?;
    scene.add(
        SceneObject::new("folder-label", ObjectKind::Prop, Collider::cuboid(2.0, 0.01, 0.4))
            .at(Vec3::new(0.0, 0.03, 0.0))
            .with_material(Material::solid(0x000000).with_emissive(0x333333, 1.0))
            .child_of(folder),
    )?;

    let patterned_box = scene.add_pickable(
        SceneObject::new(
            "imigongo-box",
            ObjectKind::PatternedBox(PatternedBox::default()),
            Collider::cuboid(1.5, 1.2, 1.5),
        )
        .at(Vec3::new(3.0, 0.75, -2.0))
        .rotated(Vec3::new(0.0, PI / 8.0, 0.0))
        .with_material(Material::solid(0xcc6644)),
    )?;
    let amulet = scene.add(
        SceneObject::new("amulet", ObjectKind::Prop, Collider::Sphere { radius: 0.4 })
            .at(Vec3::new(0.0, -0.3, 0.0))
            .with_material(Material::solid(0xffd700).with_emissive(0xaa8800, 0.3))
            .hidden()
            .child_of(patterned_box),
    )?;
    if let Some(ObjectKind::PatternedBox(contents)) =
        scene.get_mut(patterned_box).map(|o| &mut o.kind)
    {
        contents.hidden = Some(amulet);
        contents.narrative = Some(BOX_TEXT.to_string());
    }

    let coffee_tin = scene.add_pickable(
        SceneObject::new("coffee-tin", ObjectKind::Prop, Collider::cylinder(0.5, 1.2))
            .at(Vec3::new(4.0, 0.75, 2.0))
            .with_material(Material::solid(0x3d2817)),
    )?;

    let bright = Brightness::Bright.levels();
    let lamp_light = scene.add_light(SceneLight {
        name: "lamp-light".to_string(),
        position: Vec3::new(-4.0, 3.9, -3.0),
        color: rgb_hex(0xffaa00),
        intensity: bright.light_intensity,
    });
    let lamp_metal = Material::solid(0x1a1a1a);
    let lamp = scene.add_pickable(
        SceneObject::new(
            "lamp",
            ObjectKind::Lamp(LampFixture {
                light: lamp_light,
                bulb: Glow {
                    emissive: bright.emissive,
                    intensity: bright.emissive_intensity,
                },
                brightness: Brightness::Bright,
            }),
            Collider::cylinder(0.4, 0.2),
        )
        .at(Vec3::new(-5.0, 0.25, -3.0))
        .with_material(lamp_metal),
    )?;
    scene.add(
        SceneObject::new("lamp-arm", ObjectKind::Prop, Collider::cylinder(0.05, 4.0))
            .at(Vec3::new(0.0, 2.0, 0.0))
            .rotated(Vec3::new(0.0, 0.0, -PI / 6.0))
            .with_material(lamp_metal)
            .child_of(lamp),
    )?;

    Ok(DeskScene {
        scene,
        folder,
        note,
        patterned_box,
        amulet,
        coffee_tin,
        lamp,
        lamp_light,
    })
}

fn add_lights(scene: &mut Scene) {
    let lights = [
        ("spot", Vec3::new(0.0, 10.0, 0.0), 0xfff5e1, 4.0),
        ("ambient", Vec3::ZERO, 0x404040, 0.6),
        ("front", Vec3::new(0.0, 5.0, 10.0), 0xffffff, 0.5),
        ("side", Vec3::new(8.0, 4.0, 5.0), 0xffa500, 0.8),
    ];
    for (name, position, hex, intensity) in lights {
        scene.add_light(SceneLight {
            name: name.to_string(),
            position,
            color: rgb_hex(hex),
            intensity,
        });
    }
}
