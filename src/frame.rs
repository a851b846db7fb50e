use crate::constants::STATS_INTERVAL_SEC;
use crate::hud;
use crate::render::GpuState;
use crate::textures::LoadedImages;
use instant::Instant;
use sphere_core::{RenderDriver, RenderError, SceneContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneContext>>,
    pub driver: RenderDriver<GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub loaded_images: LoadedImages,

    pub shown_revision: Option<u64>,
    pub stats_since: Instant,
    pub stats_frames: u32,
}

impl FrameContext {
    pub fn frame(&mut self) -> Result<(), RenderError> {
        // Upload maps that finished loading since the last tick
        let ready: Vec<_> = self.loaded_images.borrow_mut().drain(..).collect();
        for (slot, image) in ready {
            self.driver.renderer_mut().upload_map(slot, &image);
        }

        let mut scene = self.scene.borrow_mut();
        self.driver
            .resize(&mut scene, self.canvas.width(), self.canvas.height());
        self.driver.tick(&mut scene)?;

        let revision = scene.params.revision();
        if self.shown_revision != Some(revision) {
            hud::set_param_label(&self.document, &scene.params.label());
            self.shown_revision = Some(revision);
        }
        drop(scene);

        self.stats_frames += 1;
        let elapsed = self.stats_since.elapsed().as_secs_f32();
        if elapsed >= STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps over {} ticks",
                self.stats_frames as f32 / elapsed,
                self.driver.ticks()
            );
            self.stats_since = Instant::now();
            self.stats_frames = 0;
        }
        Ok(())
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(e) = frame_ctx.borrow_mut().frame() {
            // No way back from a lost context; stop scheduling frames.
            log::error!("render error: {}; animation stopped", e);
            tick_clone.borrow_mut().take();
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
