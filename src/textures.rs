//! Fire-and-forget image loading for the material maps.
//!
//! Decoded images are queued; the frame loop drains the queue and uploads
//! them to the GPU on its next tick.

use crate::render::MapSlot;
use sphere_core::{LoadingManager, TextureSet};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type LoadedImages = Rc<RefCell<Vec<(MapSlot, web::HtmlImageElement)>>>;

pub fn start_loading(set: &TextureSet) -> LoadedImages {
    let queue: LoadedImages = Rc::new(RefCell::new(Vec::new()));
    let manager = Rc::new(RefCell::new(LoadingManager::new()));
    let jobs = [
        (MapSlot::Color, set.map.as_str()),
        (MapSlot::Bump, set.bump_map.as_str()),
        (MapSlot::Displacement, set.displacement_map.as_str()),
    ];
    for (slot, url) in jobs {
        if let Err(e) = load_one(slot, url, &manager, &queue) {
            let id = manager.borrow_mut().begin(url);
            manager.borrow_mut().fail(id);
            log::error!("Error loading texture: {} ({:?})", url, e);
        }
    }
    queue
}

fn load_one(
    slot: MapSlot,
    url: &str,
    manager: &Rc<RefCell<LoadingManager>>,
    queue: &LoadedImages,
) -> Result<(), JsValue> {
    let image = web::HtmlImageElement::new()?;
    image.set_cross_origin(Some("anonymous"));
    let id = manager.borrow_mut().begin(url);

    let onload = {
        let image = image.clone();
        let manager = manager.clone();
        let queue = queue.clone();
        Closure::wrap(Box::new(move || {
            let progress = manager.borrow_mut().complete(id);
            log::info!("Loading texture: {}% loaded", progress.percent());
            queue.borrow_mut().push((slot, image.clone()));
        }) as Box<dyn FnMut()>)
    };
    let onerror = {
        let manager = manager.clone();
        let url = url.to_string();
        Closure::wrap(Box::new(move || {
            let progress = manager.borrow_mut().fail(id);
            log::error!("Error loading texture: {}", url);
            if progress.is_done() && progress.loaded == 0 {
                log::warn!("[textures] no maps loaded; rendering untextured");
            }
        }) as Box<dyn FnMut()>)
    };
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    image.set_src(url);
    Ok(())
}
