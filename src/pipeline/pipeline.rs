use log::{debug, trace};

use crate::core::{Camera, Config, Cube, Rotation, Transform};

use super::{buffer::CharBuffer, culler::Culler, rasterizer::Rasterizer, DrawnTri};

/// Turns a set of rotation angles into a filled character grid.
///
/// Per triangle, in table order:
/// 1. Rotate, push and scale its vertices into view space
/// 2. Drop it if it faces away from the camera
/// 3. Project to grid coordinates (dropped if any vertex is behind the camera)
/// 4. Fill it with the next symbol
///
/// The symbol cursor only moves for triangles that actually get filled, so
/// culled faces never shift which symbol comes next.
pub struct Pipeline {
    cube: Cube,
    camera: Camera,
    culler: Culler,
    symbols: [char; 12],
    rasterizer: Rasterizer,
    drawn: Vec<DrawnTri>,
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        let camera = Camera::new(&config);
        Self {
            cube: Cube::new(),
            camera,
            culler: Culler::new(&camera),
            symbols: config.symbols,
            rasterizer: Rasterizer::new(config.cols, config.rows, config.blank, config.stepping),
            drawn: Vec::with_capacity(12),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Clear the grid and draw the cube at `rot`
    pub fn draw(&mut self, rot: Rotation) -> &CharBuffer {
        self.rasterizer.clear();
        self.drawn.clear();

        let transform = Transform::new(rot, &self.config);
        let mut symbol_index = 0;

        for (index, tri) in self.cube.tris.iter().enumerate() {
            let view = transform.apply_tri(self.cube.tri_vertices(tri));

            if !self.culler.is_front_facing(&view) {
                trace!("tri {} culled", index);
                continue;
            }

            let Some(screen) = self.camera.project_tri(&view) else {
                trace!("tri {} has a vertex behind the camera, skipped", index);
                continue;
            };

            let symbol = self.symbols[symbol_index];
            self.rasterizer.fill_triangle(screen, symbol);
            self.drawn.push(DrawnTri {
                index,
                symbol,
                screen,
            });
            symbol_index = (symbol_index + 1) % self.symbols.len();
        }

        debug!(
            "drew {} of {} tris at ({:.2}, {:.2}, {:.2})",
            self.drawn.len(),
            self.cube.tris.len(),
            rot.x,
            rot.y,
            rot.z
        );
        self.rasterizer.buffer()
    }

    pub fn buffer(&self) -> &CharBuffer {
        self.rasterizer.buffer()
    }

    /// Triangles filled by the most recent `draw`, in fill order
    pub fn last_draw(&self) -> &[DrawnTri] {
        &self.drawn
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
