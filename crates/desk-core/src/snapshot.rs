//! Flat per-frame buffers for the renderer that draws the scene.

use crate::scene::{ObjectKind, Scene};

/// One drawable object, laid out as 28 consecutive `f32`s.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectInstance {
    pub model: [[f32; 4]; 4],
    pub base_color: [f32; 3],
    /// 1.0 when the object and its ancestors are visible.
    pub visible: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    /// Lamp bulb glow (rgb, intensity); zero for everything else.
    pub glow: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightInstance {
    pub position: [f32; 3],
    pub intensity: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

pub const OBJECT_INSTANCE_FLOATS: usize =
    std::mem::size_of::<ObjectInstance>() / std::mem::size_of::<f32>();
pub const LIGHT_INSTANCE_FLOATS: usize =
    std::mem::size_of::<LightInstance>() / std::mem::size_of::<f32>();

/// Instances in scene order, so index `i` is `ObjectId(i)`.
pub fn object_instances(scene: &Scene) -> Vec<ObjectInstance> {
    scene
        .objects()
        .iter()
        .map(|object| {
            let model = scene
                .world_matrix(object.id)
                .unwrap_or(glam::Mat4::IDENTITY)
                .to_cols_array_2d();
            let glow = match &object.kind {
                ObjectKind::Lamp(lamp) => lamp.bulb.emissive.extend(lamp.bulb.intensity).to_array(),
                _ => [0.0; 4],
            };
            ObjectInstance {
                model,
                base_color: object.material.base_color.to_array(),
                visible: if scene.is_visible_in_world(object.id) {
                    1.0
                } else {
                    0.0
                },
                emissive: object.material.emissive.unwrap_or_default().to_array(),
                emissive_intensity: object.material.emissive_intensity,
                glow,
            }
        })
        .collect()
}

pub fn light_instances(scene: &Scene) -> Vec<LightInstance> {
    scene
        .lights()
        .iter()
        .map(|light| LightInstance {
            position: light.position.to_array(),
            intensity: light.intensity,
            color: light.color.to_array(),
            _pad: 0.0,
        })
        .collect()
}

/// Reinterpret instances as the flat float slice handed to the renderer.
pub fn as_floats<T: bytemuck::Pod>(instances: &[T]) -> &[f32] {
    bytemuck::cast_slice(instances)
}
