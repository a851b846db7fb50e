// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the browser constants directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use sphere_core::constants as scene;

#[test]
#[allow(clippy::assertions_on_constants)]
fn initial_parameters_sit_inside_their_ranges() {
    assert!(scene::BUMP_MIN <= scene::BUMP_INITIAL && scene::BUMP_INITIAL <= scene::BUMP_MAX);
    assert!(
        scene::DISPLACEMENT_MIN <= scene::DISPLACEMENT_INITIAL
            && scene::DISPLACEMENT_INITIAL <= scene::DISPLACEMENT_MAX
    );
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drag_and_spin_rates_are_positive() {
    assert!(scene::DRAG_BUMP_PER_PX > 0.0);
    assert!(scene::DRAG_DISPLACEMENT_PER_PX > 0.0);
    assert!(scene::SPIN_PER_TICK_X > 0.0);
    assert!(scene::SPIN_PER_TICK_Y > scene::SPIN_PER_TICK_X);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sees_the_whole_sphere() {
    assert!(scene::CAMERA_NEAR > 0.0 && scene::CAMERA_NEAR < scene::CAMERA_FAR);
    // Even fully displaced the surface stays in front of the near plane.
    let outer = scene::SPHERE_RADIUS + scene::DISPLACEMENT_MAX + scene::SPHERE_OFFSET.length();
    assert!(scene::CAMERA_Z - outer > scene::CAMERA_NEAR);
}

#[test]
fn controller_numbers_are_distinct_and_in_range() {
    assert_ne!(scene::CC_MOD_WHEEL, scene::CC_BRIGHTNESS);
    assert!(scene::CC_MOD_WHEEL <= scene::MIDI_VALUE_MAX);
    assert!(scene::CC_BRIGHTNESS <= scene::MIDI_VALUE_MAX);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [CANVAS_ID, PARAM_LABEL_ID, MIDI_STATUS_ID, MIDI_SELECT_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(TEXTURE_ATTR.starts_with("data-"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn placeholder_and_clear_colour_are_sane() {
    assert!(CLEAR_RGB.iter().all(|c| (0.0..=1.0).contains(c)));
    // Mid-grey so bump and displacement read a flat height.
    assert_eq!(PLACEHOLDER_TEXEL[0], PLACEHOLDER_TEXEL[1]);
    assert_eq!(PLACEHOLDER_TEXEL[1], PLACEHOLDER_TEXEL[2]);
    assert_eq!(PLACEHOLDER_TEXEL[3], 255);
    assert!(MAX_ANISOTROPY >= 1);
    assert!(STATS_INTERVAL_SEC > 0.0);
}
