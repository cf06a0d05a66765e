use crate::config::InteractionConfig;
use crate::picking::{Plane, Ray};
use crate::scene::{ObjectId, SceneObject};
use glam::{Vec2, Vec3};

/// State of one drag, alive from grab to release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub object: ObjectId,
    /// Grab point on the constraint plane minus the object position at grab time.
    pub offset: Vec3,
    /// Horizontal plane through the object's position at grab time.
    pub plane: Plane,
    pub press_ndc: Vec2,
    /// Set once the pointer leaves the click slop around `press_ndc`.
    pub moved: bool,
}

/// Grab `object`: cache its resting height, build the constraint plane and
/// grab offset, then lift it slightly.
pub fn begin(
    object: &mut SceneObject,
    ray: &Ray,
    press_ndc: Vec2,
    config: &InteractionConfig,
) -> DragSession {
    object.cache_resting_height();
    let position = object.transform.position;
    let plane = Plane::horizontal_through(position);
    let offset = ray
        .intersect_plane(&plane)
        .map(|hit| hit - position)
        .unwrap_or(Vec3::ZERO);
    object.transform.position.y += config.pickup_lift;
    log::info!("[drag] begin {}", object.name);
    DragSession {
        object: object.id,
        offset,
        plane,
        press_ndc,
        moved: false,
    }
}

/// Follow the pointer ray. Returns false when the ray misses the plane, in
/// which case the object is left where it was.
pub fn drag_to(
    object: &mut SceneObject,
    session: &mut DragSession,
    ray: &Ray,
    ndc: Vec2,
    config: &InteractionConfig,
) -> bool {
    if ndc.distance(session.press_ndc) > config.click_slop_ndc {
        session.moved = true;
    }
    let Some(hit) = ray.intersect_plane(&session.plane) else {
        return false;
    };
    let mut target = hit - session.offset;
    target.y = object.resting_height_or(config.default_resting_height);
    object.transform.position = config.bounds.clamp(target);
    true
}

/// Put the object back down at its resting height.
pub fn end(object: &mut SceneObject, session: &DragSession, config: &InteractionConfig) {
    object.transform.position.y = object.resting_height_or(config.default_resting_height);
    log::info!(
        "[drag] end {} at ({:.2},{:.2},{:.2}) moved={}",
        object.name,
        object.transform.position.x,
        object.transform.position.y,
        object.transform.position.z,
        session.moved
    );
}
