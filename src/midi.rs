//! Web MIDI glue: the browser side of `sphere_core::MidiBackend`.

use crate::{dom, hud};
use sphere_core::{
    DeviceHandle, DeviceSelector, DeviceStatus, MidiBackend, MidiEffect, MidiError, MidiMapper,
    MidiMessage, SceneContext,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct WebMidiBackend {
    access: web::MidiAccess,
    on_message: Closure<dyn FnMut(web::MidiMessageEvent)>,
}

impl WebMidiBackend {
    pub fn new(
        access: web::MidiAccess,
        scene: Rc<RefCell<SceneContext>>,
        mapper: MidiMapper,
    ) -> Self {
        let on_message = Closure::wrap(Box::new(move |ev: web::MidiMessageEvent| {
            let Ok(bytes) = ev.data() else {
                return;
            };
            log::debug!("[midi] message {:02x?}", bytes);
            let msg = MidiMessage::parse(&bytes);
            let Ok(mut ctx) = scene.try_borrow_mut() else {
                log::warn!("[midi] scene busy; dropped {:?}", msg);
                return;
            };
            match mapper.handle(&msg, &mut ctx) {
                MidiEffect::Param { param, value } => {
                    log::debug!("[midi] {} -> {:.2}", param, value)
                }
                MidiEffect::Rotation { x, y } => {
                    log::debug!("[midi] rotation -> ({:.4}, {:.4})", x, y)
                }
                MidiEffect::Ignored => {}
            }
        }) as Box<dyn FnMut(web::MidiMessageEvent)>);
        Self { access, on_message }
    }

    fn ports(&self) -> Vec<web::MidiInput> {
        let mut out = Vec::new();
        let Ok(Some(iter)) = js_sys::try_iter(&self.access.inputs()) else {
            return out;
        };
        // The input map iterates as [id, MIDIInput] pairs.
        for entry in iter.flatten() {
            let pair: js_sys::Array = entry.unchecked_into();
            if let Ok(input) = pair.get(1).dyn_into::<web::MidiInput>() {
                out.push(input);
            }
        }
        out
    }
}

impl MidiBackend for WebMidiBackend {
    type Listener = web::MidiInput;

    fn inputs(&self) -> Vec<DeviceHandle> {
        self.ports()
            .iter()
            .map(|input| DeviceHandle {
                id: input.id(),
                name: input.name().unwrap_or_else(|| input.id()),
            })
            .collect()
    }

    fn attach(&mut self, device: &DeviceHandle) -> Result<web::MidiInput, MidiError> {
        let input = self
            .ports()
            .into_iter()
            .find(|p| p.id() == device.id)
            .ok_or_else(|| MidiError::DeviceNotFound(device.id.clone()))?;
        input.set_onmidimessage(Some(self.on_message.as_ref().unchecked_ref()));
        Ok(input)
    }

    fn detach(&mut self, listener: web::MidiInput) {
        listener.set_onmidimessage(None);
    }
}

async fn request_access() -> Result<web::MidiAccess, String> {
    let window = web::window().ok_or_else(|| "no window".to_string())?;
    let promise = window
        .navigator()
        .request_midi_access()
        .map_err(|e| dom::js_error_message(&e))?;
    let access = JsFuture::from(promise)
        .await
        .map_err(|e| dom::js_error_message(&e))?;
    access
        .dyn_into::<web::MidiAccess>()
        .map_err(|e| dom::js_error_message(&e))
}

/// Enable Web MIDI, list inputs and wire the device picker. Failures only
/// affect the status line; pointer control keeps working.
pub async fn init_midi(
    document: web::Document,
    scene: Rc<RefCell<SceneContext>>,
    mapper: MidiMapper,
) {
    let access = match request_access().await {
        Ok(a) => a,
        Err(e) => {
            log::error!("WebMidi could not be enabled: {}", e);
            hud::set_midi_status(&document, &DeviceStatus::Unavailable(e));
            return;
        }
    };
    log::info!("WebMidi enabled!");

    let mut selector = DeviceSelector::new(WebMidiBackend::new(access, scene, mapper));
    let status = selector.refresh();
    hud::set_midi_status(&document, &status);

    let Some(select) = hud::device_select(&document) else {
        log::warn!("[midi] no device picker on the page");
        return;
    };
    hud::populate_devices(&select, selector.devices());
    if status == DeviceStatus::NoDevices {
        return;
    }

    let selector = Rc::new(RefCell::new(selector));
    let picker = select.clone();
    dom::add_listener(select.as_ref(), "change", move |_: web::Event| {
        let id = picker.value();
        let status = selector.borrow_mut().select_status(Some(&id));
        hud::set_midi_status(&document, &status);
    });
}
