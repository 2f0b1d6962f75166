use glam::Vec3;

use crate::core::Camera;

/// Un-normalized face normal, `(v1 - v0) x (v2 - v0)`
pub fn face_normal(verts: &[Vec3; 3]) -> Vec3 {
    let edge1 = verts[1] - verts[0];
    let edge2 = verts[2] - verts[0];
    edge1.cross(edge2)
}

/// Back-face culling against a single fixed view direction
#[derive(Debug, Clone, Copy)]
pub struct Culler {
    direction: Vec3,
}

impl Culler {
    pub fn new(camera: &Camera) -> Self {
        Self {
            direction: camera.direction,
        }
    }

    /// A face is kept only when its normal points against the view direction.
    /// Edge-on faces (dot of exactly zero) are dropped.
    pub fn is_front_facing(&self, verts: &[Vec3; 3]) -> bool {
        self.direction.dot(face_normal(verts)) < 0.0
    }
}
