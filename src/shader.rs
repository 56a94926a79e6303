use bytemuck::{Pod, Zeroable};

pub const SHADER_SOURCE: &str = include_str!("shader.wgsl");

/// Per-layer uniforms. The main cloud and the glow layer each get one.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub point_size: f32,
    pub time: f32,
    pub _padding: [f32; 2],
}
