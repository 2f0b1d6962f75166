use glam::Vec3;

use super::Config;

/// Rotation angles around the three axes, in radians.
///
/// Angles are never wrapped; sin/cos periodicity takes care of that.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation {
    pub const ZERO: Rotation = Rotation::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Advance every axis by the matching component of `delta`
    pub fn advance(&mut self, delta: Rotation) {
        self.x += delta.x;
        self.y += delta.y;
        self.z += delta.z;
    }
}

pub fn rotate_x(p: Vec3, radians: f32) -> Vec3 {
    let (sin, cos) = radians.sin_cos();
    Vec3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

pub fn rotate_y(p: Vec3, radians: f32) -> Vec3 {
    let (sin, cos) = radians.sin_cos();
    Vec3::new(cos * p.x + sin * p.z, p.y, p.z * cos - p.x * sin)
}

pub fn rotate_z(p: Vec3, radians: f32) -> Vec3 {
    let (sin, cos) = radians.sin_cos();
    Vec3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}

/// Model space to view space: rotate (X, then Y, then Z), push along +z,
/// then stretch x harder than y so the cube looks square in character cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub rot: Rotation,
    pub push: f32,
    pub scale: f32,
    pub aspect: f32,
}

impl Transform {
    pub fn new(rot: Rotation, config: &Config) -> Self {
        Self {
            rot,
            push: config.z_push,
            scale: config.scale,
            aspect: config.aspect,
        }
    }

    pub fn apply(&self, p: Vec3) -> Vec3 {
        let p = rotate_x(p, self.rot.x);
        let p = rotate_y(p, self.rot.y);
        let p = rotate_z(p, self.rot.z);
        Vec3::new(
            p.x * self.scale * self.aspect,
            p.y * self.scale,
            p.z + self.push,
        )
    }

    pub fn apply_tri(&self, verts: [Vec3; 3]) -> [Vec3; 3] {
        verts.map(|v| self.apply(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn quarter_turns() {
        assert!(close(rotate_x(Vec3::Y, FRAC_PI_2), Vec3::Z));
        assert!(close(rotate_y(Vec3::Z, FRAC_PI_2), Vec3::X));
        assert!(close(rotate_z(Vec3::X, FRAC_PI_2), Vec3::Y));
    }

    #[test]
    fn rotation_order_is_x_then_y_then_z() {
        let rot = Rotation::new(0.7, -1.1, 2.3);
        let p = Vec3::new(1.0, -1.0, 1.0);
        let manual = rotate_z(rotate_y(rotate_x(p, rot.x), rot.y), rot.z);
        let t = Transform {
            rot,
            push: 0.0,
            scale: 1.0,
            aspect: 1.0,
        };
        assert_eq!(t.apply(p), manual);
    }

    #[test]
    fn apply_is_deterministic() {
        let t = Transform::new(Rotation::new(12.5, 7.5, 5.0), &Config::default());
        let p = Vec3::new(-1.0, 1.0, -1.0);
        let first = t.apply(p);
        for _ in 0..10 {
            assert_eq!(t.apply(p).to_array(), first.to_array());
        }
    }

    #[test]
    fn identity_rotation_only_pushes_and_scales() {
        let t = Transform::new(Rotation::ZERO, &Config::default());
        let v = t.apply(Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(v, Vec3::new(-180.0, -60.0, 7.0));
    }

    #[test]
    fn advance_accumulates_without_wrapping() {
        let mut rot = Rotation::ZERO;
        for _ in 0..1000 {
            rot.advance(Rotation::new(0.05, 0.03, 0.02));
        }
        assert!(rot.x > 49.0 && rot.y > 29.0 && rot.z > 19.0);
    }
}
