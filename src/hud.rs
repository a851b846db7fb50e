//! On-page readouts: the parameter label, the MIDI status line and the
//! device picker. All of them are optional; a page without the elements
//! still renders.

use crate::constants::*;
use sphere_core::{DeviceHandle, DeviceStatus};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn set_param_label(document: &web::Document, label: &str) {
    if let Some(el) = document.get_element_by_id(PARAM_LABEL_ID) {
        el.set_text_content(Some(label));
    }
}

pub fn set_midi_status(document: &web::Document, status: &DeviceStatus) {
    if let Some(el) = document.get_element_by_id(MIDI_STATUS_ID) {
        el.set_text_content(Some(&status.to_string()));
    }
}

pub fn device_select(document: &web::Document) -> Option<web::HtmlSelectElement> {
    document
        .get_element_by_id(MIDI_SELECT_ID)?
        .dyn_into::<web::HtmlSelectElement>()
        .ok()
}

/// Replace the device options, keeping the leading fixed entries.
pub fn populate_devices(select: &web::HtmlSelectElement, devices: &[DeviceHandle]) {
    while select.length() > MIDI_SELECT_FIXED_OPTIONS {
        select.remove_with_index((select.length() - 1) as i32);
    }
    for device in devices {
        match web::HtmlOptionElement::new_with_text_and_value(&device.name, &device.id) {
            Ok(option) => {
                if let Err(e) = select.add_with_html_option_element(&option) {
                    log::warn!("[hud] could not add option {}: {:?}", device.id, e);
                }
            }
            Err(e) => log::warn!("[hud] option element: {:?}", e),
        }
    }
}
