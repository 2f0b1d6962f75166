use glam::Vec3;

/// A triangle as three indices into the cube's vertex table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tri {
    pub indices: [usize; 3],
}

impl Tri {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { indices: [a, b, c] }
    }
}

#[rustfmt::skip]
const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0,  1.0, -1.0),
    Vec3::new( 1.0,  1.0, -1.0),
    Vec3::new( 1.0, -1.0, -1.0),
    Vec3::new( 1.0,  1.0,  1.0),
    Vec3::new( 1.0, -1.0,  1.0),
    Vec3::new(-1.0, -1.0,  1.0),
    Vec3::new(-1.0,  1.0,  1.0),
];

// Two per face, wound so (v1 - v0) x (v2 - v0) points out of the cube.
#[rustfmt::skip]
const CUBE_TRIS: [Tri; 12] = [
    Tri::new(0, 1, 2), Tri::new(0, 2, 3), // -z
    Tri::new(3, 2, 4), Tri::new(3, 4, 5), // +x
    Tri::new(5, 4, 7), Tri::new(5, 7, 6), // +z
    Tri::new(6, 7, 1), Tri::new(6, 1, 0), // -x
    Tri::new(6, 0, 3), Tri::new(6, 3, 5), // -y
    Tri::new(1, 7, 4), Tri::new(1, 4, 2), // +y
];

/// The fixed unit cube, centred on the origin with side length 2
#[derive(Clone, Debug)]
pub struct Cube {
    pub vertices: [Vec3; 8],
    pub tris: [Tri; 12],
}

impl Cube {
    pub fn new() -> Self {
        Self {
            vertices: CUBE_VERTICES,
            tris: CUBE_TRIS,
        }
    }

    /// Model space positions of a triangle's corners
    pub fn tri_vertices(&self, tri: &Tri) -> [Vec3; 3] {
        tri.indices.map(|i| self.vertices[i])
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
