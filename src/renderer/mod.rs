//! WebGPU rendering module
//!
//! CPU-tessellated triangle lists drawn through a single colored-vertex
//! pipeline. Implements the `Surface` drawing contract.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
