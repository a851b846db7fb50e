//! Per-frame update: spin the sphere, push the current parameters into the
//! material and draw once.

use crate::material::MaterialParams;
use crate::scene::{Rotation, SceneContext};
use glam::{Mat4, Vec3};
use thiserror::Error;

/// Unrecoverable renderer failures. Surface hiccups that a reconfigure fixes
/// are handled inside the renderer and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("render context lost: {0}")]
    ContextLost(String),
    #[error("out of GPU memory")]
    OutOfMemory,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
    pub model: Mat4,
    pub view_proj: Mat4,
    pub eye: Vec3,
    pub material: MaterialParams,
}

pub trait SceneRenderer {
    /// Resize the output surface (physical pixels).
    fn resize(&mut self, width: u32, height: u32);
    fn render(&mut self, frame: &FrameInputs) -> Result<(), RenderError>;
}

pub struct RenderDriver<R: SceneRenderer> {
    renderer: R,
    material: MaterialParams,
    spin: Rotation,
    ticks: u64,
}

impl<R: SceneRenderer> RenderDriver<R> {
    pub fn new(renderer: R, spin: Rotation) -> Self {
        Self {
            renderer,
            material: MaterialParams::default(),
            spin,
            ticks: 0,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn material(&self) -> &MaterialParams {
        &self.material
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick(&mut self, ctx: &mut SceneContext) -> Result<(), RenderError> {
        ctx.rotation.advance(self.spin);
        self.material.apply(ctx.params.state());
        let frame = FrameInputs {
            model: ctx.model_matrix(),
            view_proj: ctx.camera.view_proj(),
            eye: ctx.camera.eye,
            material: self.material,
        };
        self.ticks += 1;
        self.renderer.render(&frame)
    }

    /// Refit camera and surface to a new viewport. Parameters are untouched.
    pub fn resize(&mut self, ctx: &mut SceneContext, width: u32, height: u32) -> bool {
        if !ctx.resize(width, height) {
            return false;
        }
        self.renderer.resize(width, height);
        log::debug!("[driver] viewport {}x{}", width, height);
        true
    }
}
