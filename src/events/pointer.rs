use crate::dom;
use sphere_core::{DragMapper, SceneContext};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneContext>>,
    pub drag: Rc<RefCell<DragMapper>>,
}

/// Vertical drags anywhere on the page tune bump and displacement. Presses
/// start on the canvas so the device picker stays usable.
pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
}

fn wire_pointerdown(w: &PointerWiring) {
    let drag = w.drag.clone();
    dom::add_listener(w.canvas.as_ref(), "pointerdown", move |ev: web::PointerEvent| {
        drag.borrow_mut().pointer_down(ev.client_y() as f32);
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &PointerWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let drag = w.drag.clone();
    let scene = w.scene.clone();
    dom::add_listener(window.as_ref(), "pointermove", move |ev: web::PointerEvent| {
        let mut drag = drag.borrow_mut();
        if !drag.is_dragging() {
            return;
        }
        let Ok(mut ctx) = scene.try_borrow_mut() else {
            return;
        };
        drag.pointer_move(ev.client_y() as f32, &mut ctx.params);
    });
}

fn wire_pointerup(w: &PointerWiring) {
    let Some(window) = web::window() else {
        return;
    };
    for event in ["pointerup", "pointercancel"] {
        let drag = w.drag.clone();
        dom::add_listener(window.as_ref(), event, move |_: web::PointerEvent| {
            drag.borrow_mut().pointer_up();
        });
    }
}

fn wire_pointerleave(w: &PointerWiring) {
    let Some(root) = dom::window_document().and_then(|d| d.document_element()) else {
        return;
    };
    let drag = w.drag.clone();
    dom::add_listener(root.as_ref(), "pointerleave", move |_: web::PointerEvent| {
        if drag.borrow().is_dragging() {
            log::debug!("[pointer] left the page; drag ended");
        }
        drag.borrow_mut().pointer_leave();
    });
}
