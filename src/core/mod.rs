pub mod camera;
pub mod config;
pub mod geometry;
pub mod transform;

pub use camera::Camera;
pub use config::{Config, EdgeStepping};
pub use geometry::{Cube, Tri};
pub use transform::{Rotation, Transform};
