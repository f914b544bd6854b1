//! Rendering module
//!
//! The simulation records primitives onto a `Canvas`; `shapes::tessellate`
//! converts a recorded `DrawList` into triangles for a GPU host.

pub mod draw;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use draw::{Canvas, DrawCommand, DrawList};
pub use scene::SceneStyle;
pub use shapes::tessellate;
pub use vertex::{ScreenUniform, Vertex, upload_size};
