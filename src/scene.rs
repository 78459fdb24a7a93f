// Scene graph for the 3D demo.

use glam::Mat4;

use crate::math::Transform;
use crate::shader::Uniforms;

/// An object within the 3D scene.
///
/// The scene owns each object's transform; whoever drives the frame mutates
/// it between frames through [`Scene::get_object_mut`].
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub transform: Transform,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
        }
    }
}

/// The entire 3D scene.
#[derive(Debug, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Creates a new, empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Adds an object to the scene.
    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Gets an immutable reference to an object by name.
    pub fn get_object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|obj| obj.name == name)
    }

    /// Gets a mutable reference to an object by name.
    pub fn get_object_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|obj| obj.name == name)
    }

    /// Per-object uniform blocks for the current frame, in insertion order.
    pub fn uniforms(&self, view_projection: Mat4) -> Vec<Uniforms> {
        self.objects
            .iter()
            .map(|obj| {
                let mut uniforms = Uniforms::new();
                uniforms.update_mvp(view_projection * obj.transform.model_matrix());
                uniforms
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn objects_are_found_by_name() {
        let mut scene = Scene::new();
        scene.add_object(SceneObject::new("cube", Transform::identity()));
        scene.add_object(SceneObject::new("pyramid", Transform::identity()));

        assert!(scene.get_object("cube").is_some());
        assert!(scene.get_object("missing").is_none());

        let cube = scene.get_object_mut("cube").unwrap();
        cube.transform.position = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(
            scene.get_object("cube").unwrap().transform.position,
            Vec3::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn uniforms_follow_insertion_order() {
        let mut scene = Scene::new();
        scene.add_object(SceneObject::new(
            "near",
            Transform::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, Vec3::ONE),
        ));
        scene.add_object(SceneObject::new(
            "far",
            Transform::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::ZERO, Vec3::ONE),
        ));

        let uniforms = scene.uniforms(Mat4::IDENTITY);
        assert_eq!(uniforms.len(), 2);
        // With an identity view-projection, the mvp is the model matrix and
        // the translation lands in the last column.
        assert_eq!(uniforms[0].mvp[3][0], 1.0);
        assert_eq!(uniforms[1].mvp[3][0], -1.0);
    }
}
