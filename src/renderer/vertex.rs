//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::ParticleColor;

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
    pub const BACKGROUND: [f32; 4] = [0.02, 0.03, 0.08, 1.0];
    pub const STAR: [f32; 4] = [0.46, 0.66, 1.0, 1.0]; // #76a9ff
    pub const PLAYER: [f32; 4] = [0.31, 0.96, 1.0, 1.0]; // #4ff5ff
    pub const COCKPIT: [f32; 4] = [0.05, 0.18, 0.33, 1.0]; // #0c2f54
    pub const BULLET: [f32; 4] = [0.55, 0.98, 1.0, 1.0]; // #8cf9ff
    pub const ENEMY_BULLET: [f32; 4] = [1.0, 0.59, 0.44, 1.0]; // #ff9671
    pub const ENEMY_TOP: [f32; 4] = [1.0, 0.42, 0.42, 1.0]; // #ff6b6b
    pub const ENEMY_BOTTOM: [f32; 4] = [1.0, 0.62, 0.49, 1.0]; // #ff9e7c
    pub const ENEMY_SHADE: [f32; 4] = [0.0, 0.0, 0.0, 0.3];

    pub const EXHAUST: [f32; 4] = [0.48, 0.98, 1.0, 1.0]; // #7bf9ff
    pub const SPARK: [f32; 4] = [1.0, 0.84, 0.42, 1.0]; // #ffd66b
    pub const EXPLOSION: [f32; 4] = [1.0, 0.37, 0.39, 1.0]; // #ff5f64
    pub const SHIP_BURST: [f32; 4] = [0.42, 0.88, 1.0, 1.0]; // #6be0ff
}

/// Palette entry for a particle tag
pub fn particle_color(color: ParticleColor) -> [f32; 4] {
    match color {
        ParticleColor::Exhaust => colors::EXHAUST,
        ParticleColor::Spark => colors::SPARK,
        ParticleColor::Explosion => colors::EXPLOSION,
        ParticleColor::ShipBurst => colors::SHIP_BURST,
    }
}

/// Same color with a different alpha
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha.clamp(0.0, 1.0)]
}
