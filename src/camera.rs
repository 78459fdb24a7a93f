// Cameras for the two demos: a look-at perspective camera for the 3D scene
// and a pan/zoom view for the 2D flow field.

use glam::{Mat4, Vec2, Vec3};

/// A look-at camera for the 3D demo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view, in radians.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 45.0_f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect_ratio, self.near, self.far)
    }

    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        self.projection(aspect_ratio) * self.view()
    }
}

/// Pan and zoom state of the flow-field viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewProperties {
    pub zoom: f32,
    pub pan: Vec2,
}

impl Default for ViewProperties {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

impl ViewProperties {
    pub fn new(zoom: f32, pan: Vec2) -> Self {
        Self { zoom, pan }
    }

    pub fn zoom_matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::new(self.zoom, self.zoom, 1.0))
    }

    pub fn pan_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.pan.extend(0.0))
    }

    /// Maps origin-centered pixel coordinates covering `size` to clip space.
    pub fn projection(size: Vec2) -> Mat4 {
        Mat4::orthographic_rh(
            -0.5 * size.x,
            0.5 * size.x,
            -0.5 * size.y,
            0.5 * size.y,
            -1.0,
            1.0,
        )
    }

    /// The vertex-stage view transform: projection, then zoom, then pan.
    pub fn view_transform(&self, size: Vec2) -> Mat4 {
        Self::projection(size) * self.zoom_matrix() * self.pan_matrix()
    }
}
