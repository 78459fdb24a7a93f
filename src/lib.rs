//! CPU-side core of two cooperating real-time demos: a skeletal 3D object
//! demo and a 2D flow-field vector visualization.
//!
//! The crate owns the math (object transforms, cameras, frame timing), the
//! geometry (primitive meshes, flow-field lattices and arrow expansion) and
//! the host side of every shader data-layout contract. It deliberately stops
//! short of the GPU: no window, no device, no shader dispatch, no buffer
//! upload — consumers feed the prepared blocks to whatever pipeline they
//! drive.

pub mod camera;
pub mod field;
pub mod math;
pub mod mesh;
pub mod scene;
pub mod shader;
pub mod time;

pub use camera::{Camera, ViewProperties};
pub use field::{FieldError, FieldGrid};
pub use math::Transform;
pub use scene::{Scene, SceneObject};
pub use time::{TimeManager, TimeSlice};
