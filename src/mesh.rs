// CPU-side mesh data for the 3D demo.
//
// Geometry stops at the byte slices a consumer would upload; buffer creation
// belongs to whoever owns the device.

use glam::Vec3;

/// Vertex payload of the 3D demo pipeline: position and color.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position: position.into(),
            color: color.into(),
        }
    }

    /// Buffer layout this payload presents to a pipeline: position at
    /// location 0, color at location 1, 24 bytes per vertex.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
        ],
    };
}

/// Indexed triangle geometry, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    /// A unit cube centered on the origin, one color per face.
    pub fn cube() -> Self {
        let faces: [([[f32; 3]; 4], [f32; 3]); 6] = [
            // Front (red)
            (
                [
                    [-0.5, -0.5, 0.5],
                    [0.5, -0.5, 0.5],
                    [0.5, 0.5, 0.5],
                    [-0.5, 0.5, 0.5],
                ],
                [1.0, 0.0, 0.0],
            ),
            // Back (green)
            (
                [
                    [-0.5, -0.5, -0.5],
                    [-0.5, 0.5, -0.5],
                    [0.5, 0.5, -0.5],
                    [0.5, -0.5, -0.5],
                ],
                [0.0, 1.0, 0.0],
            ),
            // Top (blue)
            (
                [
                    [-0.5, 0.5, -0.5],
                    [-0.5, 0.5, 0.5],
                    [0.5, 0.5, 0.5],
                    [0.5, 0.5, -0.5],
                ],
                [0.0, 0.0, 1.0],
            ),
            // Bottom (yellow)
            (
                [
                    [-0.5, -0.5, -0.5],
                    [0.5, -0.5, -0.5],
                    [0.5, -0.5, 0.5],
                    [-0.5, -0.5, 0.5],
                ],
                [1.0, 1.0, 0.0],
            ),
            // Right (magenta)
            (
                [
                    [0.5, -0.5, -0.5],
                    [0.5, 0.5, -0.5],
                    [0.5, 0.5, 0.5],
                    [0.5, -0.5, 0.5],
                ],
                [1.0, 0.0, 1.0],
            ),
            // Left (cyan)
            (
                [
                    [-0.5, -0.5, -0.5],
                    [-0.5, -0.5, 0.5],
                    [-0.5, 0.5, 0.5],
                    [-0.5, 0.5, -0.5],
                ],
                [0.0, 1.0, 1.0],
            ),
        ];

        let mut vertices = Vec::with_capacity(faces.len() * 4);
        let mut indices = Vec::with_capacity(faces.len() * 6);
        for (corners, color) in faces {
            let base = vertices.len() as u16;
            for corner in corners {
                vertices.push(Vertex {
                    position: corner,
                    color,
                });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }

        Self { vertices, indices }
    }

    /// A square pyramid with colored sides and a white base.
    pub fn pyramid() -> Self {
        let apex = [0.0, 1.0, 0.0];
        let back_left = [-0.5, 0.0, -0.5];
        let back_right = [0.5, 0.0, -0.5];
        let front_right = [0.5, 0.0, 0.5];
        let front_left = [-0.5, 0.0, 0.5];

        let red = [1.0, 0.0, 0.0];
        let green = [0.0, 1.0, 0.0];
        let blue = [0.0, 0.0, 1.0];
        let yellow = [1.0, 1.0, 0.0];
        let white = [1.0, 1.0, 1.0];

        let triangles: [([[f32; 3]; 3], [f32; 3]); 6] = [
            ([apex, back_left, back_right], red),
            ([apex, back_right, front_right], green),
            ([apex, front_right, front_left], blue),
            ([apex, front_left, back_left], yellow),
            ([back_left, back_right, front_right], white),
            ([back_left, front_right, front_left], white),
        ];

        let mut vertices = Vec::with_capacity(triangles.len() * 3);
        for (corners, color) in triangles {
            for corner in corners {
                vertices.push(Vertex {
                    position: corner,
                    color,
                });
            }
        }
        let indices = (0..vertices.len() as u16).collect();

        Self { vertices, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Vertex data as the bytes a vertex buffer would hold.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as the bytes an index buffer would hold.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
