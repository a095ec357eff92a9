// Scene arena and the composer that builds the fixed core + satellites layout.

use super::color::{hue_for_index, Rgb};
use super::config::ProjectEntry;
use super::constants::*;
use super::orbit::OrbitState;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;

/// Handle into the scene arena. Stable for the session; objects are never removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Core,
    Glow,
    Satellite,
}

impl MeshKind {
    /// Local-space shape used for ray picking.
    pub fn bounds(self) -> Bounds {
        match self {
            MeshKind::Core => Bounds::Sphere {
                radius: CORE_RADIUS,
            },
            MeshKind::Glow => Bounds::Sphere {
                radius: GLOW_RADIUS,
            },
            MeshKind::Satellite => Bounds::Cube {
                half_extent: SATELLITE_SIZE * 0.5,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bounds {
    Sphere { radius: f32 },
    Cube { half_extent: f32 },
}

/// Phong-style surface description. Colors are linear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub emissive: Rgb,
    pub shininess: f32,
    pub opacity: f32,
    /// Unlit edges only.
    pub wireframe: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied in X, Y, Z order.
    pub rotation: Vec3,
}

impl Transform {
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation_quat(), self.position)
    }
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub mesh: MeshKind,
    pub material: Material,
    pub transform: Transform,
    pub parent: Option<ObjectId>,
}

#[derive(Clone, Debug)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    pub background: Rgb,
    pub fog_color: Rgb,
    pub fog_near: f32,
    pub fog_far: f32,
}

impl Default for Scene {
    fn default() -> Self {
        let background = Rgb::from_hex(BACKGROUND_COLOR).to_linear();
        Self {
            nodes: Vec::new(),
            background,
            fog_color: background,
            fog_near: FOG_NEAR,
            fog_far: FOG_FAR,
        }
    }
}

impl Scene {
    pub fn add(&mut self, node: SceneNode) -> ObjectId {
        let id = ObjectId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (ObjectId(i as u32), n))
    }

    /// Local-to-world matrix, following the parent chain.
    pub fn world_matrix(&self, id: ObjectId) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        let mut cur = self.get(id);
        while let Some(node) = cur {
            m = node.transform.matrix() * m;
            cur = node.parent.and_then(|p| self.get(p));
        }
        m
    }
}

/// A configured project placed on its orbit. The visual object is referenced by
/// handle; orbit parameters live here, not on the scene node.
#[derive(Clone, Debug)]
pub struct Satellite {
    pub project: ProjectEntry,
    pub orbit: OrbitState,
    pub object: ObjectId,
}

#[derive(Clone, Debug)]
pub struct Composition {
    pub scene: Scene,
    pub core: ObjectId,
    pub glow: ObjectId,
    pub satellites: Vec<Satellite>,
}

pub fn satellite_color(index: usize, count: usize) -> Rgb {
    Rgb::from_hsl(
        hue_for_index(index, count),
        SATELLITE_SATURATION,
        SATELLITE_LIGHTNESS,
    )
}

/// Build the core, its glow shell and one satellite per project.
///
/// Speeds are `SATELLITE_SPEED_BASE + [0, SATELLITE_SPEED_JITTER)` drawn from
/// `rng`, in project order.
pub fn compose<R: Rng + ?Sized>(projects: &[ProjectEntry], rng: &mut R) -> Composition {
    let mut scene = Scene::default();

    let core = scene.add(SceneNode {
        mesh: MeshKind::Core,
        material: Material {
            color: Rgb::from_hex(CORE_COLOR).to_linear(),
            emissive: Rgb::from_hex(CORE_EMISSIVE).to_linear(),
            shininess: SHININESS,
            opacity: 1.0,
            wireframe: false,
        },
        transform: Transform::default(),
        parent: None,
    });
    let glow = scene.add(SceneNode {
        mesh: MeshKind::Glow,
        material: Material {
            color: Rgb::from_hex(CORE_COLOR).to_linear(),
            emissive: Rgb::BLACK,
            shininess: 0.0,
            opacity: GLOW_OPACITY,
            wireframe: true,
        },
        transform: Transform::default(),
        parent: Some(core),
    });

    let count = projects.len();
    let mut satellites = Vec::with_capacity(count);
    for (index, project) in projects.iter().enumerate() {
        let speed = SATELLITE_SPEED_BASE + rng.gen_range(0.0..SATELLITE_SPEED_JITTER);
        let orbit = OrbitState::new(index, count, project.radius, speed);
        let color = satellite_color(index, count);
        let object = scene.add(SceneNode {
            mesh: MeshKind::Satellite,
            material: Material {
                color: color.to_linear(),
                emissive: color.to_linear().scale(SATELLITE_EMISSIVE_INTENSITY),
                shininess: SHININESS,
                opacity: 1.0,
                wireframe: false,
            },
            transform: Transform {
                position: orbit.position(),
                rotation: Vec3::ZERO,
            },
            parent: None,
        });
        satellites.push(Satellite {
            project: *project,
            orbit,
            object,
        });
    }
    log::info!("[scene] composed core + {} satellites", satellites.len());

    Composition {
        scene,
        core,
        glow,
        satellites,
    }
}
