pub use sphere_core::*;

// Shaders bundled as string constants
pub static SPHERE_WGSL: &str = include_str!("../../shaders/sphere.wgsl");
