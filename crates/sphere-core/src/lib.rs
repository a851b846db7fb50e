pub mod camera;
pub mod config;
pub mod constants;
pub mod devices;
pub mod drag;
pub mod driver;
pub mod geometry;
pub mod loading;
pub mod material;
pub mod midi;
pub mod params;
pub mod scene;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use devices::*;
pub use drag::*;
pub use driver::*;
pub use geometry::*;
pub use loading::*;
pub use material::*;
pub use midi::*;
pub use params::*;
pub use scene::*;
