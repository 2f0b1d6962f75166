use glam::IVec2;

pub mod buffer;
pub mod culler;
pub mod pipeline;
pub mod rasterizer;

pub use buffer::CharBuffer;
pub use culler::{face_normal, Culler};
pub use pipeline::Pipeline;
pub use rasterizer::Rasterizer;

/// A triangle that survived culling and projection and was filled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawnTri {
    /// Position in the cube's triangle table
    pub index: usize,
    pub symbol: char,
    /// Projected corners, in table order
    pub screen: [IVec2; 3],
}
