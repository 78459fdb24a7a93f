// Headless demo: a few frames of the 3D scene and the flow field, without a
// window or a device.

use glam::{Vec2, Vec3};

use flowfield::camera::{Camera, ViewProperties};
use flowfield::field::FieldGrid;
use flowfield::math::Transform;
use flowfield::mesh::MeshData;
use flowfield::scene::{Scene, SceneObject};
use flowfield::shader::{ColorSchema, GridProperties, VectorVertexContext};
use flowfield::time::TimeManager;

fn main() {
    // Initialize logging
    env_logger::init();

    // 3D side: a cube and a pyramid viewed by the default camera.
    let mut scene = Scene::new();
    scene.add_object(SceneObject::new(
        "cube",
        Transform::new(Vec3::new(-1.2, 0.0, 0.0), Vec3::ZERO, Vec3::ONE),
    ));
    scene.add_object(SceneObject::new(
        "pyramid",
        Transform::new(Vec3::new(1.2, 0.0, 0.0), Vec3::ZERO, Vec3::splat(0.8)),
    ));
    let cube = MeshData::cube();
    let pyramid = MeshData::pyramid();
    log::info!(
        "scene holds {} objects ({} + {} vertices)",
        scene.objects.len(),
        cube.vertex_count(),
        pyramid.vertex_count()
    );

    let camera = Camera::new();
    let aspect_ratio = 1280.0 / 720.0;

    // Flow-field side: a rotational field sampled on a 32x18 lattice.
    let mut grid = FieldGrid::new(32, 18, Vec2::new(1280.0, 720.0)).expect("valid field lattice");
    let view = ViewProperties::default();
    let colors = ColorSchema::DEFAULT;
    let backdrop = GridProperties::default();
    let mut timer = TimeManager::new();

    let setup = grid.setup_context();
    log::info!(
        "lattice of {} vectors, step {:?}, corner {:?}, backdrop spacing {}",
        grid.count(),
        setup.step,
        setup.corner,
        backdrop.spacing
    );

    for frame in 0..4 {
        let slice = timer.step();

        // Spin the cube the way the windowed demo would between redraws.
        if let Some(cube) = scene.get_object_mut("cube") {
            cube.transform.rotation.y = slice.elapsed;
        }
        let uniforms = scene.uniforms(camera.view_projection(aspect_ratio));

        let vectors = grid.sample(|p| 0.05 * Vec2::new(-p.y, p.x));
        let arrows = grid.renderables(&vectors, view.zoom);
        let vertex_context = VectorVertexContext::new(view.zoom, view.view_transform(grid.size()));
        let animate = grid.animate_context(slice);

        let peak = arrows.iter().map(|a| a.mag).fold(0.0_f32, f32::max);
        log::info!(
            "frame {frame}: t={:.3}s dt={:.3}s, {} arrows, peak magnitude {:.1}, ramp {:06x}..{:06x}",
            animate.time,
            animate.delta_time,
            arrows.len(),
            peak,
            colors.min_hex(),
            colors.max_hex()
        );
        log::debug!(
            "prepared {} uniform blocks, flow view zoom {}",
            uniforms.len(),
            vertex_context.zoom
        );
    }

    // Halve the lattice density, as a viewport shrink would.
    grid.resize(16, 9, Vec2::new(1280.0, 720.0))
        .expect("valid field lattice");
    log::info!(
        "lattice now {}x{}, cell step {:?}",
        grid.columns(),
        grid.rows(),
        grid.step()
    );
}
