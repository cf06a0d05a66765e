//! Scene objects the interaction layer reads and mutates.
//!
//! The scene is assembled once by the host (see `layout`) and then owned by
//! the interaction session. Interaction code only touches transforms,
//! materials, visibility and the two cached fields on each object; the kind
//! payload carries the per-kind behaviour data the dispatcher switches on.

use crate::constants::*;
use crate::error::{SceneError, SceneResult};
use crate::picking::Collider;
use fnv::FnvHashMap;
use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LightId(pub usize);

/// Position, XYZ Euler rotation (radians) and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    #[inline]
    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Local-to-parent matrix.
    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}

/// Base colour plus a single emissive highlight channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub base_color: Vec3,
    pub emissive: Option<Vec3>,
    pub emissive_intensity: f32,
}

impl Material {
    pub fn solid(hex: u32) -> Self {
        Self {
            base_color: rgb_hex(hex),
            emissive: None,
            emissive_intensity: 0.0,
        }
    }

    pub fn with_emissive(mut self, hex: u32, intensity: f32) -> Self {
        self.emissive = Some(rgb_hex(hex));
        self.emissive_intensity = intensity;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Brightness {
    Off,
    Dim,
    Bright,
}

/// Light intensity, bulb emissive intensity and bulb emissive colour for one lamp state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LampLevels {
    pub light_intensity: f32,
    pub emissive_intensity: f32,
    pub emissive: Vec3,
}

impl Brightness {
    /// Bright -> Dim -> Off -> Bright.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Brightness::Bright => Brightness::Dim,
            Brightness::Dim => Brightness::Off,
            Brightness::Off => Brightness::Bright,
        }
    }

    pub fn levels(self) -> LampLevels {
        let (light, emissive_intensity, hex) = match self {
            Brightness::Off => LAMP_OFF,
            Brightness::Dim => LAMP_DIM,
            Brightness::Bright => LAMP_BRIGHT,
        };
        LampLevels {
            light_intensity: light,
            emissive_intensity,
            emissive: rgb_hex(hex),
        }
    }
}

/// The lamp bulb's glow, kept apart from the lamp body's material so hover
/// highlighting never fights the brightness state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub emissive: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LampFixture {
    pub light: LightId,
    pub bulb: Glow,
    pub brightness: Brightness,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct CaseFile {
    pub narrative: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct PatternedBox {
    pub hidden: Option<ObjectId>,
    pub narrative: Option<String>,
}

/// Capability tag plus the data each behaviour needs.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectKind {
    CaseFile(CaseFile),
    PatternedBox(PatternedBox),
    Lamp(LampFixture),
    Prop,
}

impl ObjectKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ObjectKind::CaseFile(_) => "case-file",
            ObjectKind::PatternedBox(_) => "patterned-box",
            ObjectKind::Lamp(_) => "lamp",
            ObjectKind::Prop => "prop",
        }
    }

    /// Click-only objects react to clicks but can never be dragged.
    #[inline]
    pub fn is_click_only(&self) -> bool {
        matches!(self, ObjectKind::Lamp(_))
    }
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub transform: Transform,
    pub material: Material,
    pub collider: Collider,
    pub kind: ObjectKind,
    pub visible: bool,
    pub parent: Option<ObjectId>,
    resting_height: Option<f32>,
    original_emissive: Option<Vec3>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, kind: ObjectKind, collider: Collider) -> Self {
        Self {
            id: ObjectId(usize::MAX),
            name: name.into(),
            transform: Transform::default(),
            material: Material::solid(0xffffff),
            collider,
            kind,
            visible: true,
            parent: None,
            resting_height: None,
            original_emissive: None,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn child_of(mut self, parent: ObjectId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn resting_height(&self) -> Option<f32> {
        self.resting_height
    }

    /// Cached resting height, or `default` when the object was never grabbed.
    #[inline]
    pub fn resting_height_or(&self, default: f32) -> f32 {
        self.resting_height.unwrap_or(default)
    }

    /// Record the current height as the resting height unless one is already
    /// cached. A cached value is never overwritten, zero included.
    pub fn cache_resting_height(&mut self) -> f32 {
        *self
            .resting_height
            .get_or_insert(self.transform.position.y)
    }

    pub fn original_emissive(&self) -> Option<Vec3> {
        self.original_emissive
    }

    pub(crate) fn cache_original_emissive(&mut self) -> Vec3 {
        let current = self.material.emissive.unwrap_or(Vec3::ZERO);
        *self.original_emissive.get_or_insert(current)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneLight {
    pub name: String,
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<SceneLight>,
    pickables: Vec<ObjectId>,
    names: FnvHashMap<String, ObjectId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object. Names are unique; a parent must already exist.
    pub fn add(&mut self, mut object: SceneObject) -> SceneResult<ObjectId> {
        if self.names.contains_key(&object.name) {
            return Err(SceneError::DuplicateName(object.name));
        }
        if let Some(parent) = object.parent {
            if parent.0 >= self.objects.len() {
                return Err(SceneError::UnknownObject(parent));
            }
        }
        let id = ObjectId(self.objects.len());
        object.id = id;
        self.names.insert(object.name.clone(), id);
        self.objects.push(object);
        Ok(id)
    }

    pub fn add_pickable(&mut self, object: SceneObject) -> SceneResult<ObjectId> {
        let id = self.add(object)?;
        self.pickables.push(id);
        Ok(id)
    }

    /// Append an existing object to the pickable list. Re-adding is a no-op.
    pub fn make_pickable(&mut self, id: ObjectId) -> SceneResult<()> {
        if id.0 >= self.objects.len() {
            return Err(SceneError::UnknownObject(id));
        }
        if !self.pickables.contains(&id) {
            self.pickables.push(id);
        }
        Ok(())
    }

    pub fn add_light(&mut self, light: SceneLight) -> LightId {
        self.lights.push(light);
        LightId(self.lights.len() - 1)
    }

    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    #[inline]
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.0)
    }

    pub fn object(&self, id: ObjectId) -> SceneResult<&SceneObject> {
        self.get(id).ok_or(SceneError::UnknownObject(id))
    }

    pub fn light(&self, id: LightId) -> SceneResult<&SceneLight> {
        self.lights.get(id.0).ok_or(SceneError::UnknownLight(id))
    }

    pub fn light_mut(&mut self, id: LightId) -> Option<&mut SceneLight> {
        self.lights.get_mut(id.0)
    }

    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.names.get(name).copied()
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[SceneLight] {
        &self.lights
    }

    /// Ordered candidate list for picking.
    pub fn pickables(&self) -> &[ObjectId] {
        &self.pickables
    }

    pub fn is_pickable(&self, id: ObjectId) -> bool {
        self.pickables.contains(&id)
    }

    /// Local-to-world matrix, composing the parent chain.
    pub fn world_matrix(&self, id: ObjectId) -> Option<Mat4> {
        let mut object = self.get(id)?;
        let mut m = object.transform.matrix();
        // Parents are inserted before their children, so this walk always ends.
        while let Some(parent) = object.parent {
            object = self.get(parent)?;
            m = object.transform.matrix() * m;
        }
        Some(m)
    }

    /// Visible only if the object and all of its ancestors are visible.
    pub fn is_visible_in_world(&self, id: ObjectId) -> bool {
        let Some(mut object) = self.get(id) else {
            return false;
        };
        loop {
            if !object.visible {
                return false;
            }
            match object.parent.and_then(|p| self.get(p)) {
                Some(parent) => object = parent,
                None => return true,
            }
        }
    }
}
