// DOM hooks and GPU tuning for the web front-end.
//
// Scene and input tuning lives in `sphere_core::constants`; these are the
// values that only make sense in the browser.

// Element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const PARAM_LABEL_ID: &str = "bumpValue";
pub const MIDI_STATUS_ID: &str = "midiStatus";
pub const MIDI_SELECT_ID: &str = "midiInputs";
pub const TEXTURE_ATTR: &str = "data-texture"; // optional override on the canvas

// Options kept at the top of the device <select> ("none" entry)
pub const MIDI_SELECT_FIXED_OPTIONS: u32 = 1;

// Background (pure black for maximum contrast)
pub const CLEAR_RGB: [f64; 3] = [0.0, 0.0, 0.0];

// Sampling
pub const MAX_ANISOTROPY: u16 = 16;

// Frame stats are logged this often (seconds)
pub const STATS_INTERVAL_SEC: f32 = 10.0;

// Flat placeholder used until an image arrives: mid-grey so bump and
// displacement read a constant height.
pub const PLACEHOLDER_TEXEL: [u8; 4] = [128, 128, 128, 255];
