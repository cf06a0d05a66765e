// Host-side tests for ray casting and picking.
// The web crate is wasm-only, so these exercise desk-core directly.

use desk_core::picking::{self, ray_aabb, ray_cylinder, ray_sphere, Collider, Plane, Ray};
use desk_core::{ObjectKind, Scene, SceneObject};
use glam::Vec3;

fn prop_box(name: &str, at: Vec3) -> SceneObject {
    SceneObject::new(name, ObjectKind::Prop, Collider::cuboid(1.0, 1.0, 1.0)).at(at)
}

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
}

#[test]
fn ray_aabb_hits_near_face() {
    let t = ray_aabb(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, Vec3::splat(1.0)).unwrap();
    assert!((t - 9.0).abs() < 1e-5);
}

#[test]
fn ray_aabb_parallel_outside_slab_misses() {
    assert!(ray_aabb(Vec3::new(0.0, 2.0, 10.0), -Vec3::Z, Vec3::splat(1.0)).is_none());
}

#[test]
fn ray_aabb_from_inside_reports_zero() {
    let t = ray_aabb(Vec3::ZERO, Vec3::X, Vec3::splat(1.0)).unwrap();
    assert_eq!(t, 0.0);
}

#[test]
fn ray_cylinder_hits_side_and_cap() {
    let side = ray_cylinder(Vec3::new(5.0, 0.0, 0.0), -Vec3::X, 0.5, 1.0).unwrap();
    assert!((side - 4.5).abs() < 1e-5);
    let cap = ray_cylinder(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y, 0.5, 1.0).unwrap();
    assert!((cap - 9.0).abs() < 1e-5);
}

#[test]
fn ray_cylinder_misses_above_the_top() {
    assert!(ray_cylinder(Vec3::new(5.0, 2.0, 0.0), -Vec3::X, 0.5, 1.0).is_none());
}

#[test]
fn plane_intersection_parallel_and_behind() {
    let plane = Plane::horizontal_through(Vec3::ZERO);
    let down = Ray::new(Vec3::new(1.0, 5.0, 2.0), -Vec3::Y);
    let hit = down.intersect_plane(&plane).unwrap();
    assert!(hit.distance(Vec3::new(1.0, 0.0, 2.0)) < 1e-5);

    let parallel = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::X);
    assert!(parallel.intersect_plane(&plane).is_none());

    let away = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
    assert!(away.intersect_plane(&plane).is_none());
}

#[test]
fn pick_returns_nearest_candidate() {
    let mut scene = Scene::new();
    let far = scene.add_pickable(prop_box("far", Vec3::new(0.0, 0.0, -5.0))).unwrap();
    let near = scene.add_pickable(prop_box("near", Vec3::ZERO)).unwrap();
    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z);

    let hit = picking::pick_ray(&ray, &scene, scene.pickables()).unwrap();
    assert_eq!(hit.object, near);
    assert!((hit.distance - 9.5).abs() < 1e-4);

    let only_far = picking::pick_ray(&ray, &scene, &[far]).unwrap();
    assert_eq!(only_far.object, far);
}

#[test]
fn pick_with_no_candidates_is_none() {
    let mut scene = Scene::new();
    scene.add(prop_box("not-pickable", Vec3::ZERO)).unwrap();
    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z);
    assert!(picking::pick_ray(&ray, &scene, scene.pickables()).is_none());
}

#[test]
fn invisible_objects_are_never_picked() {
    let mut scene = Scene::new();
    let hidden = scene
        .add_pickable(prop_box("ghost", Vec3::ZERO).hidden())
        .unwrap();
    let behind = scene
        .add_pickable(prop_box("behind", Vec3::new(0.0, 0.0, -3.0)))
        .unwrap();
    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z);
    let hit = picking::pick_ray(&ray, &scene, scene.pickables()).unwrap();
    assert_ne!(hit.object, hidden);
    assert_eq!(hit.object, behind);
}

#[test]
fn rotated_box_is_tested_in_its_own_frame() {
    let mut scene = Scene::new();
    let plank = scene
        .add_pickable(
            SceneObject::new("plank", ObjectKind::Prop, Collider::cuboid(4.0, 1.0, 0.2))
                .rotated(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0)),
        )
        .unwrap();
    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z);
    let hit = picking::pick_ray(&ray, &scene, scene.pickables()).unwrap();
    assert_eq!(hit.object, plank);
    // The long side now runs along Z.
    assert!((hit.distance - 8.0).abs() < 1e-3);
}

#[test]
fn child_collider_follows_parent_transform() {
    let mut scene = Scene::new();
    let parent = scene.add(prop_box("parent", Vec3::new(3.0, 0.0, 0.0))).unwrap();
    let child = scene
        .add_pickable(
            SceneObject::new("child", ObjectKind::Prop, Collider::Sphere { radius: 0.5 })
                .at(Vec3::new(0.0, 2.0, 0.0))
                .child_of(parent),
        )
        .unwrap();
    let ray = Ray::new(Vec3::new(3.0, 2.0, 10.0), -Vec3::Z);
    let hit = picking::pick_ray(&ray, &scene, scene.pickables()).unwrap();
    assert_eq!(hit.object, child);
    assert!((hit.distance - 9.5).abs() < 1e-3);
}
