use glam::{IVec2, Vec3};

use super::Config;

/// Fixed viewer: a view direction for culling and the viewport it projects onto.
///
/// There is no position or field of view, the cube is moved in front of the
/// camera by the transform instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub direction: Vec3,
    pub cols: usize,
    pub rows: usize,
}

impl Camera {
    pub fn new(config: &Config) -> Self {
        Self {
            direction: config.camera_direction,
            cols: config.cols,
            rows: config.rows,
        }
    }

    /// Perspective divide onto the character grid.
    ///
    /// Returns `None` for points at or behind the camera plane, whose divide
    /// would flip or blow up the result.
    pub fn project(&self, p: Vec3) -> Option<IVec2> {
        if !p.is_finite() || p.z <= 0.0 {
            return None;
        }
        // Integer halves, matching the classic viewport centre
        let cx = (self.cols / 2) as f32;
        let cy = (self.rows / 2) as f32;
        let x = (p.x / p.z + cx).round();
        let y = (p.y / p.z + cy).round();
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(IVec2::new(x as i32, y as i32))
    }

    pub fn project_tri(&self, verts: &[Vec3; 3]) -> Option<[IVec2; 3]> {
        Some([
            self.project(verts[0])?,
            self.project(verts[1])?,
            self.project(verts[2])?,
        ])
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_ray_hits_centre() {
        let cam = Camera::default();
        assert_eq!(cam.project(Vec3::new(0.0, 0.0, 8.0)), Some(IVec2::new(100, 25)));
    }

    #[test]
    fn rounds_to_nearest() {
        let cam = Camera::default();
        // -180 / 7 = -25.71 -> 74.29, -60 / 7 = -8.57 -> 16.43
        assert_eq!(
            cam.project(Vec3::new(-180.0, -60.0, 7.0)),
            Some(IVec2::new(74, 16))
        );
        // 180 / 9 = 20, 60 / 9 = 6.67 -> 31.67
        assert_eq!(
            cam.project(Vec3::new(180.0, 60.0, 9.0)),
            Some(IVec2::new(120, 32))
        );
    }

    #[test]
    fn rejects_points_behind_camera() {
        let cam = Camera::default();
        assert_eq!(cam.project(Vec3::new(1.0, 1.0, 0.0)), None);
        assert_eq!(cam.project(Vec3::new(1.0, 1.0, -3.0)), None);
        assert_eq!(cam.project(Vec3::new(f32::NAN, 1.0, 3.0)), None);
    }

    #[test]
    fn one_bad_vertex_rejects_the_tri() {
        let cam = Camera::default();
        let tri = [
            Vec3::new(0.0, 0.0, 8.0),
            Vec3::new(10.0, 0.0, 8.0),
            Vec3::new(0.0, 10.0, -1.0),
        ];
        assert_eq!(cam.project_tri(&tri), None);
    }
}
