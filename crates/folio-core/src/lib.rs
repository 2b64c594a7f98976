pub mod animation;
pub mod camera;
pub mod choreographer;
pub mod constants;
pub mod driver;
pub mod geometry;
pub mod light;
pub mod pose;
pub mod render;
pub mod scene;
pub mod scroll;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use animation::*;
pub use camera::*;
pub use choreographer::*;
pub use driver::*;
pub use light::*;
pub use pose::*;
pub use scene::*;
pub use scroll::*;
