use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::constants::SPHERE_OFFSET;
use crate::params::ParameterStore;
use glam::Mat4;

/// Sphere orientation in radians (applied X then Y).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

impl Rotation {
    #[inline]
    pub fn advance(&mut self, step: Rotation) {
        self.x += step.x;
        self.y += step.y;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Everything the input mappers mutate and the render driver reads.
///
/// Shared by reference instead of living in globals; the web front-end wraps
/// one instance in `Rc<RefCell<_>>`.
#[derive(Clone, Debug)]
pub struct SceneContext {
    pub params: ParameterStore,
    pub rotation: Rotation,
    pub camera: Camera,
    viewport: Viewport,
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::new(&SceneConfig::default())
    }
}

impl SceneContext {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            params: ParameterStore::new(
                config.initial,
                config.bump_range,
                config.displacement_range,
            ),
            rotation: Rotation::default(),
            camera: Camera::default(),
            viewport: Viewport::default(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record a new viewport size and refit the camera. Returns `false` for
    /// zero-sized or unchanged viewports.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let next = Viewport { width, height };
        if next == self.viewport || !self.camera.set_viewport(width, height) {
            return false;
        }
        self.viewport = next;
        true
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(SPHERE_OFFSET)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
    }
}
