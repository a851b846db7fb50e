#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::{DragMapper, MidiMapper, RenderDriver, SceneConfig, SceneContext};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod hud;
mod midi;
mod render;
mod textures;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn scene_config(canvas: &web::HtmlCanvasElement) -> SceneConfig {
    match dom::attribute(canvas.as_ref(), TEXTURE_ATTR) {
        Some(url) => {
            log::info!("[init] texture override: {}", url);
            SceneConfig::default().with_texture(url)
        }
        None => SceneConfig::default(),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sphere-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config = scene_config(&canvas);
    let scene = Rc::new(RefCell::new(SceneContext::new(&config)));
    hud::set_param_label(&document, &scene.borrow().params.label());

    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        drag: Rc::new(RefCell::new(DragMapper::new(config.drag))),
    });

    // MIDI is optional; its failures only reach the status line.
    spawn_local(midi::init_midi(
        document.clone(),
        scene.clone(),
        MidiMapper::new(config.binding.clone()),
    ));

    let gpu = render::GpuState::new(&canvas).await?;
    let loaded_images = textures::start_loading(&config.textures);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        driver: RenderDriver::new(gpu, config.spin_per_tick),
        canvas,
        document,
        loaded_images,
        shown_revision: None,
        stats_since: Instant::now(),
        stats_frames: 0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
