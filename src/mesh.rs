// CPU-side geometry for the three meshes in the scene.

use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    /// Triangle list indices.
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Unique edges of the triangle list as a line-list index buffer.
    pub fn edge_indices(&self) -> Vec<u32> {
        let mut seen: FnvHashSet<(u32, u32)> = FnvHashSet::default();
        let mut out = Vec::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    out.push(key.0);
                    out.push(key.1);
                }
            }
        }
        out
    }
}

const ICO_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn ico_corners() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Welds vertices that land on the same point so neighbouring faces share them.
/// Points are bucketed on a coarse grid and compared against neighbouring
/// cells, so tiny float differences across faces never split a vertex.
struct Welder {
    radius: f32,
    cells: FnvHashMap<[i64; 3], Vec<u32>>,
    dirs: Vec<Vec3>,
    vertices: Vec<Vertex>,
}

const WELD_CELL: f32 = 1e3;
const WELD_EPS_SQ: f32 = 1e-10;

impl Welder {
    fn new(radius: f32) -> Self {
        Self {
            radius,
            cells: FnvHashMap::default(),
            dirs: Vec::new(),
            vertices: Vec::new(),
        }
    }

    fn vertex(&mut self, dir: Vec3) -> u32 {
        let n = dir.normalize();
        let cell = [
            (n.x * WELD_CELL).floor() as i64,
            (n.y * WELD_CELL).floor() as i64,
            (n.z * WELD_CELL).floor() as i64,
        ];
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let key = [cell[0] + dx, cell[1] + dy, cell[2] + dz];
                    if let Some(bucket) = self.cells.get(&key) {
                        for &i in bucket {
                            if self.dirs[i as usize].distance_squared(n) < WELD_EPS_SQ {
                                return i;
                            }
                        }
                    }
                }
            }
        }
        let i = self.vertices.len() as u32;
        self.dirs.push(n);
        self.vertices.push(Vertex {
            position: (n * self.radius).to_array(),
            normal: n.to_array(),
        });
        self.cells.entry(cell).or_default().push(i);
        i
    }
}

/// Icosahedron with each face split into `(detail + 1)^2` triangles and every
/// vertex pushed onto the sphere. Normals are smooth (radial).
pub fn icosphere(radius: f32, detail: u32) -> MeshData {
    let corners = ico_corners();
    let n = detail as usize + 1;
    let mut welder = Welder::new(radius);
    let mut indices = Vec::with_capacity(ICO_FACES.len() * n * n * 3);

    for face in ICO_FACES {
        let (a, b, c) = (corners[face[0]], corners[face[1]], corners[face[2]]);
        // grid[i][j]: row i walks from edge ab toward c, j walks across the row
        let mut grid: Vec<Vec<u32>> = Vec::with_capacity(n + 1);
        for i in 0..=n {
            let f = i as f32 / n as f32;
            let aj = a.lerp(c, f);
            let bj = b.lerp(c, f);
            let rows = n - i;
            let row = (0..=rows)
                .map(|j| {
                    if rows == 0 {
                        welder.vertex(aj)
                    } else {
                        welder.vertex(aj.lerp(bj, j as f32 / rows as f32))
                    }
                })
                .collect();
            grid.push(row);
        }
        for i in 0..n {
            for j in 0..(2 * (n - i) - 1) {
                let k = j / 2;
                if j % 2 == 0 {
                    indices.extend_from_slice(&[grid[i][k + 1], grid[i + 1][k], grid[i][k]]);
                } else {
                    indices.extend_from_slice(&[
                        grid[i][k + 1],
                        grid[i + 1][k + 1],
                        grid[i + 1][k],
                    ]);
                }
            }
        }
    }

    MeshData {
        vertices: welder.vertices,
        indices,
    }
}

/// Axis-aligned cube centred on the origin with flat per-face normals.
pub fn cube(size: f32) -> MeshData {
    let h = size * 0.5;
    // (normal, u axis, v axis); u x v == normal keeps faces counter-clockwise
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, u, v) in faces {
        let base = vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = (normal + u * su + v * sv) * h;
            vertices.push(Vertex {
                position: p.to_array(),
                normal: normal.to_array(),
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    MeshData { vertices, indices }
}
