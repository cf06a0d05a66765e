use crate::camera::Camera;
use crate::scene::{ObjectId, Scene};
use glam::{Mat4, Vec2, Vec3};

const PARALLEL_EPS: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Point where the ray meets `plane`, or `None` when parallel or behind the origin.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        let denom = plane.normal.dot(self.dir);
        if denom.abs() < PARALLEL_EPS {
            return None;
        }
        let t = -(plane.normal.dot(self.origin) + plane.constant) / denom;
        (t >= 0.0).then(|| self.at(t))
    }
}

/// Plane `normal . p + constant = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub constant: f32,
}

impl Plane {
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            constant: -normal.dot(point),
        }
    }

    /// Horizontal plane passing through `point`.
    #[inline]
    pub fn horizontal_through(point: Vec3) -> Self {
        Self::from_normal_and_point(Vec3::Y, point)
    }
}

/// Collision shape in object-local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Collider {
    Box { half_extents: Vec3 },
    /// Upright cylinder around the local Y axis.
    Cylinder { radius: f32, half_height: f32 },
    Sphere { radius: f32 },
}

impl Collider {
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Collider::Box {
            half_extents: Vec3::new(width, height, depth) * 0.5,
        }
    }

    pub fn cylinder(radius: f32, height: f32) -> Self {
        Collider::Cylinder {
            radius,
            half_height: height * 0.5,
        }
    }

    /// Ray parameter of the nearest hit for a unit-direction ray in local space.
    pub fn intersect_local(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        match *self {
            Collider::Box { half_extents } => ray_aabb(origin, dir, half_extents),
            Collider::Cylinder {
                radius,
                half_height,
            } => ray_cylinder(origin, dir, radius, half_height),
            Collider::Sphere { radius } => ray_sphere(origin, dir, Vec3::ZERO, radius),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub object: ObjectId,
    /// Distance along the ray, in world units.
    pub distance: f32,
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Slab test against a box centred on the origin.
pub fn ray_aabb(origin: Vec3, dir: Vec3, half_extents: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let h = half_extents[axis];
        if d.abs() < PARALLEL_EPS {
            if o < -h || o > h {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (-h - o) * inv;
        let mut t1 = (h - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }
    if t_far < 0.0 {
        return None;
    }
    Some(t_near.max(0.0))
}

/// Capped cylinder around the Y axis, centred on the origin.
pub fn ray_cylinder(origin: Vec3, dir: Vec3, radius: f32, half_height: f32) -> Option<f32> {
    let mut best = None::<f32>;
    let mut consider = |t: f32| {
        if t >= 0.0 && best.map_or(true, |b| t < b) {
            best = Some(t);
        }
    };

    let a = dir.x * dir.x + dir.z * dir.z;
    if a > PARALLEL_EPS {
        let b = origin.x * dir.x + origin.z * dir.z;
        let c = origin.x * origin.x + origin.z * origin.z - radius * radius;
        let disc = b * b - a * c;
        if disc >= 0.0 {
            let sq = disc.sqrt();
            for t in [(-b - sq) / a, (-b + sq) / a] {
                if (origin.y + dir.y * t).abs() <= half_height {
                    consider(t);
                }
            }
        }
    }

    if dir.y.abs() > PARALLEL_EPS {
        for cap in [-half_height, half_height] {
            let t = (cap - origin.y) / dir.y;
            let p = origin + dir * t;
            if p.x * p.x + p.z * p.z <= radius * radius {
                consider(t);
            }
        }
    }
    best
}

/// World-space distance to `collider` placed by `world`, if the ray hits it.
pub fn intersect_collider(ray: &Ray, collider: &Collider, world: Mat4) -> Option<f32> {
    if world.determinant().abs() < 1e-12 {
        return None;
    }
    let inv = world.inverse();
    let local_origin = inv.transform_point3(ray.origin);
    let local_dir = inv.transform_vector3(ray.dir);
    let len = local_dir.length();
    if len < 1e-12 {
        return None;
    }
    let local_dir = local_dir / len;
    let t = collider.intersect_local(local_origin, local_dir)?;
    let world_hit = world.transform_point3(local_origin + local_dir * t);
    Some(world_hit.distance(ray.origin))
}

/// Nearest visible candidate hit by `ray`. An empty candidate list yields `None`.
pub fn pick_ray(ray: &Ray, scene: &Scene, candidates: &[ObjectId]) -> Option<Hit> {
    let mut best = None::<Hit>;
    for &id in candidates {
        if !scene.is_visible_in_world(id) {
            continue;
        }
        let (Some(object), Some(world)) = (scene.get(id), scene.world_matrix(id)) else {
            continue;
        };
        if let Some(distance) = intersect_collider(ray, &object.collider, world) {
            match best {
                Some(b) if distance >= b.distance => {}
                _ => {
                    best = Some(Hit {
                        object: id,
                        distance,
                    })
                }
            }
        }
    }
    best
}

/// Pick against the scene's pickable list through a normalized pointer coordinate.
#[inline]
pub fn pick(ndc: Vec2, camera: &Camera, scene: &Scene) -> Option<Hit> {
    pick_ray(&camera.ray_from_ndc(ndc), scene, scene.pickables())
}
