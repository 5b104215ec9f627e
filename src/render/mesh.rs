use crate::constants::{BODY_COLOR, SCREEN_COLOR, SCREEN_INSET, SLAB_DEPTH, SLAB_HEIGHT, SLAB_WIDTH};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Vertex {
    pub(crate) pos: [f32; 3],
    pub(crate) normal: [f32; 3],
    pub(crate) color: [f32; 3],
}

impl Vertex {
    pub(crate) const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x3];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

pub(crate) struct MeshData {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) indices: Vec<u16>,
    pub(crate) min: Vec3,
    pub(crate) max: Vec3,
}

fn push_quad(m: &mut MeshData, corners: [Vec3; 4], normal: Vec3, color: [f32; 3]) {
    let base = m.vertices.len() as u16;
    for c in corners {
        m.vertices.push(Vertex {
            pos: c.to_array(),
            normal: normal.to_array(),
            color,
        });
        m.min = m.min.min(c);
        m.max = m.max.max(c);
    }
    m.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// Stand-in device body: a thin box with an inset screen on its front face.
pub(crate) fn device_slab() -> MeshData {
    let mut m = MeshData {
        vertices: Vec::with_capacity(28),
        indices: Vec::with_capacity(42),
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(f32::MIN),
    };
    let (x, y, z) = (SLAB_WIDTH * 0.5, SLAB_HEIGHT * 0.5, SLAB_DEPTH * 0.5);
    let v = Vec3::new;
    // counter-clockwise seen from outside
    push_quad(&mut m, [v(-x, -y, z), v(x, -y, z), v(x, y, z), v(-x, y, z)], Vec3::Z, BODY_COLOR);
    push_quad(&mut m, [v(x, -y, -z), v(-x, -y, -z), v(-x, y, -z), v(x, y, -z)], Vec3::NEG_Z, BODY_COLOR);
    push_quad(&mut m, [v(x, -y, z), v(x, -y, -z), v(x, y, -z), v(x, y, z)], Vec3::X, BODY_COLOR);
    push_quad(&mut m, [v(-x, -y, -z), v(-x, -y, z), v(-x, y, z), v(-x, y, -z)], Vec3::NEG_X, BODY_COLOR);
    push_quad(&mut m, [v(-x, y, z), v(x, y, z), v(x, y, -z), v(-x, y, -z)], Vec3::Y, BODY_COLOR);
    push_quad(&mut m, [v(-x, -y, -z), v(x, -y, -z), v(x, -y, z), v(-x, -y, z)], Vec3::NEG_Y, BODY_COLOR);

    let (sx, sy, sz) = (x - SCREEN_INSET, y - SCREEN_INSET, z + 0.001);
    push_quad(&mut m, [v(-sx, -sy, sz), v(sx, -sy, sz), v(sx, sy, sz), v(-sx, sy, sz)], Vec3::Z, SCREEN_COLOR);
    m
}
