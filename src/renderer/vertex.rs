//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.75, 0.9, 1.0, 1.0];
    pub const GRASS: [f32; 4] = [0.486, 0.765, 0.424, 1.0]; // #7cc36c
    pub const SAND: [f32; 4] = [0.969, 0.843, 0.42, 1.0]; // #f7d76b
    pub const TREE_TRUNK: [f32; 4] = [0.42, 0.29, 0.169, 1.0]; // #6b4a2b
    pub const TREE_TOP: [f32; 4] = [0.294, 0.184, 0.082, 1.0]; // #4b2f15
    pub const SLING_FRAME: [f32; 4] = [0.294, 0.184, 0.082, 1.0];
    pub const SLING_BAND: [f32; 4] = [0.227, 0.11, 0.059, 1.0]; // #3a1c0f

    pub const BIRD: [f32; 4] = [1.0, 0.353, 0.373, 1.0]; // #ff5a5f
    pub const BIRD_EYE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BIRD_PUPIL: [f32; 4] = [0.122, 0.122, 0.122, 1.0];
    pub const AIM: [f32; 4] = [1.0, 0.353, 0.373, 0.5];

    pub const BLOCK: [f32; 4] = [0.851, 0.643, 0.255, 1.0]; // #d9a441
    pub const BLOCK_HIT: [f32; 4] = [0.718, 0.718, 0.718, 1.0];
    pub const BLOCK_EDGE: [f32; 4] = [0.62, 0.451, 0.188, 1.0]; // #9e7330

    pub const PIG: [f32; 4] = [0.435, 0.812, 0.357, 1.0]; // #6fcf5b
    pub const PIG_HIT: [f32; 4] = [0.643, 0.643, 0.643, 1.0];
    pub const PIG_EYE: [f32; 4] = [0.11, 0.239, 0.122, 1.0]; // #1c3d1f
    pub const PIG_EYE_HIT: [f32; 4] = [0.4, 0.4, 0.4, 1.0];
}
