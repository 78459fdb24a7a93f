// Math utilities shared by the demo renderers

use glam::{Mat4, Vec3};

/// Position, rotation and scale of a single rendered object.
///
/// Rotation is stored as Euler angles in radians, one per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create a new transform
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Generate the object-to-world matrix.
    ///
    /// Scale is applied first, then the Z, Y and X axis rotations, then the
    /// translation. The result is column-major, as the consuming pipeline
    /// expects. Degenerate scale is not rejected; a zero component yields a
    /// singular matrix and a negative one a mirrored matrix.
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z);

        Mat4::from_translation(self.position) * rotation * Mat4::from_scale(self.scale)
    }

    /// The model matrix as 16 floats in column-major order.
    pub fn model_array(&self) -> [f32; 16] {
        self.model_matrix().to_cols_array()
    }
}
