// Host-side mirrors of the shader parameter blocks.
//
// Field order, size and alignment must match the shader compilation units
// bit for bit. GPU vector/matrix alignment (8-byte vec2, 16-byte vec3/vec4
// and mat4x4) inserts padding that the shader never names; here it is
// explicit so the Rust layout is the contract. The tests at the bottom pin
// every size and the non-obvious offsets.
//
// These records carry no logic. Grid and arrow behavior that produces them
// lives in `field`.

use glam::{Mat4, Vec2, Vec3};

/// Endpoints of the magnitude color ramp used by the vector fragment stage.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorSchema {
    pub min: [f32; 3],
    _pad0: f32,
    pub max: [f32; 3],
    _pad1: f32,
}

impl ColorSchema {
    /// The demo's stock blue-to-purple ramp.
    pub const DEFAULT: Self = Self {
        min: [0.337255, 0.7568628, 0.9098039],
        _pad0: 0.0,
        max: [0.462745, 0.337255, 0.9098039],
        _pad1: 0.0,
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.into(),
            _pad0: 0.0,
            max: max.into(),
            _pad1: 0.0,
        }
    }

    /// The low endpoint as a packed `0xRRGGBB` integer.
    pub fn min_hex(&self) -> u32 {
        pack_hex(self.min)
    }

    /// The high endpoint as a packed `0xRRGGBB` integer.
    pub fn max_hex(&self) -> u32 {
        pack_hex(self.max)
    }

    /// Linear sample of the ramp at `t` in `[0, 1]`.
    pub fn sample(&self, t: f32) -> [f32; 3] {
        Vec3::from(self.min).lerp(Vec3::from(self.max), t).into()
    }
}

fn pack_hex(rgb: [f32; 3]) -> u32 {
    ((rgb[0] * 255.0) as u32) << 16 | ((rgb[1] * 255.0) as u32) << 8 | (rgb[2] * 255.0) as u32
}

/// A flow vector in polar form: anchor point, direction and length.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParametricVector {
    pub tail: [f32; 2],
    pub angle: f32,
    pub mag: f32,
}

/// A flow vector as a line segment from tail to tip.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CartesianVector {
    pub tail: [f32; 2],
    pub tip: [f32; 2],
}

/// Screen-space arrow geometry produced from one flow vector: a body quad,
/// an arrowhead triangle and the sample magnitude for the color ramp.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderableVector {
    pub bottom_left: [f32; 2],
    pub bottom_right: [f32; 2],
    pub top_left: [f32; 2],
    pub top_right: [f32; 2],
    pub tri_left: [f32; 2],
    pub tri_right: [f32; 2],
    pub tri_top: [f32; 2],
    pub mag: f32,
    pub(crate) _pad: f32,
}

/// Lattice placement parameters for the vector setup stage.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VectorSetupContext {
    pub step: [f32; 2],
    pub corner: [f32; 2],
    pub columns: u32,
    pub rows: u32,
}

/// Per-frame parameters for the vector animation stage.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VectorAnimateContext {
    pub step: [f32; 2],
    pub size: [f32; 2],
    pub columns: u32,
    pub rows: u32,
    pub time: f32,
    pub delta_time: f32,
}

/// Stroke width and arrowhead size for arrow expansion.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ExpandContext {
    pub thickness: f32,
    pub magnitude: f32,
}

/// Vertex-stage view transform for the flow field.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VectorVertexContext {
    pub zoom: f32,
    _pad: [f32; 3],
    pub transform: [[f32; 4]; 4],
}

impl VectorVertexContext {
    pub fn new(zoom: f32, transform: Mat4) -> Self {
        Self {
            zoom,
            _pad: [0.0; 3],
            transform: transform.to_cols_array_2d(),
        }
    }
}

/// Parameters of the background grid kernel.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GridProperties {
    pub thickness: f32,
    pub spacing: f32,
    pub zoom: f32,
    _pad0: f32,
    pub offset: [f32; 2],
    _pad1: [f32; 2],
    pub background: [f32; 4],
    pub line: [f32; 4],
}

impl GridProperties {
    pub fn new(
        thickness: f32,
        spacing: f32,
        zoom: f32,
        offset: Vec2,
        background: [f32; 4],
        line: [f32; 4],
    ) -> Self {
        Self {
            thickness,
            spacing,
            zoom,
            _pad0: 0.0,
            offset: offset.into(),
            _pad1: [0.0; 2],
            background,
            line,
        }
    }
}

impl Default for GridProperties {
    /// Mid-gray background with white unit lines, unzoomed.
    fn default() -> Self {
        Self::new(
            1.0,
            50.0,
            1.0,
            Vec2::ZERO,
            [0.33, 0.33, 0.33, 1.0],
            [1.0, 1.0, 1.0, 1.0],
        )
    }
}

/// Uniform buffer structure for the 3D demo's per-object MVP matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub mvp: [[f32; 4]; 4],
}

impl Uniforms {
    pub fn new() -> Self {
        Self {
            mvp: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    pub fn update_mvp(&mut self, mvp: Mat4) {
        self.mvp = mvp.to_cols_array_2d();
    }
}

impl Default for Uniforms {
    fn default() -> Self {
        Self::new()
    }
}
