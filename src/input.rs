use super::constants::POINTER_OFFSET_SCALE;
use super::scene::{Bounds, ObjectId, Scene};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// Window size in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

/// Last pointer position as a scaled offset from the viewport centre (+y down).
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn from_client(client: Vec2, viewport: &Viewport) -> Self {
        Self {
            x: (client.x - viewport.width / 2.0) * POINTER_OFFSET_SCALE,
            y: (client.y - viewport.height / 2.0) * POINTER_OFFSET_SCALE,
        }
    }
}

/// Client pixel coordinates to normalized device coordinates, +y up.
#[inline]
pub fn client_to_ndc(client: Vec2, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        (client.x / viewport.width) * 2.0 - 1.0,
        -(client.y / viewport.height) * 2.0 + 1.0,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
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

/// Slab test against an axis-aligned cube centred on the origin. The ray must
/// already be in the cube's local space. Returns the entry distance; a ray
/// starting inside the cube does not hit (only front faces count).
#[inline]
pub fn ray_cube_local(ray_origin: Vec3, ray_dir: Vec3, half_extent: f32) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let o = ray_origin[axis];
        let d = ray_dir[axis];
        if d.abs() < 1e-8 {
            if o.abs() > half_extent {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (-half_extent - o) * inv;
        let mut t1 = (half_extent - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }
    (t_near >= 0.0).then_some(t_near)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub distance: f32,
    pub point: Vec3,
    pub object: ObjectId,
}

pub type Intersections = SmallVec<[Intersection; 4]>;

/// Cast `ray` against `candidates` only. Results are sorted nearest-first.
pub fn intersect_objects(
    ray: &Ray,
    scene: &Scene,
    candidates: impl IntoIterator<Item = ObjectId>,
) -> Intersections {
    let mut hits = Intersections::new();
    for id in candidates {
        let Some(node) = scene.get(id) else {
            continue;
        };
        let world = scene.world_matrix(id);
        let (_, rotation, center) = world.to_scale_rotation_translation();
        let hit = match node.mesh.bounds() {
            Bounds::Sphere { radius } => ray_sphere(ray.origin, ray.direction, center, radius),
            Bounds::Cube { half_extent } => {
                let inv = rotation.inverse();
                let local_origin = inv * (ray.origin - center);
                let local_dir = inv * ray.direction;
                ray_cube_local(local_origin, local_dir, half_extent)
            }
        };
        if let Some(distance) = hit {
            hits.push(Intersection {
                distance,
                point: ray.at(distance),
                object: id,
            });
        }
    }
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}
