//! GPU-facing types for tessellated frames
//!
//! Vertices stay in surface pixels (origin top-left, y down). The vertex
//! shader maps them to clip space with `ScreenUniform`, so a resize only
//! touches the uniform and never the vertex data.

use bytemuck::{Pod, Zeroable};

use crate::Color;

/// Colored 2D vertex in surface pixels
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }

    /// Same transform the vertex shader applies
    pub fn to_clip(&self, screen: &ScreenUniform) -> [f32; 2] {
        let [w, h] = screen.size;
        [
            self.position[0] / w * 2.0 - 1.0,
            1.0 - self.position[1] / h * 2.0,
        ]
    }
}

/// Surface size uniform, padded to 16 bytes for uniform buffer alignment
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ScreenUniform {
    pub size: [f32; 2],
    _pad: [f32; 2],
}

impl ScreenUniform {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: [width.max(1) as f32, height.max(1) as f32],
            _pad: [0.0; 2],
        }
    }
}

/// Bytes a host would upload for one frame
pub fn upload_size(vertices: &[Vertex], screen: &ScreenUniform) -> usize {
    bytemuck::cast_slice::<Vertex, u8>(vertices).len() + bytemuck::bytes_of(screen).len()
}
