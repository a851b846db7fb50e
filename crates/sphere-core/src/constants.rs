use glam::Vec3;

// Shared tuning constants for the sphere scene and its input mappers.

// Material parameters
pub const BUMP_INITIAL: f32 = 1.0;
pub const BUMP_MIN: f32 = 0.0;
pub const BUMP_MAX: f32 = 5.0;
pub const DISPLACEMENT_INITIAL: f32 = 0.3;
pub const DISPLACEMENT_MIN: f32 = 0.0;
pub const DISPLACEMENT_MAX: f32 = 2.0;

// Pointer drag sensitivity (parameter units per pixel of vertical travel)
pub const DRAG_BUMP_PER_PX: f32 = 0.005;
pub const DRAG_DISPLACEMENT_PER_PX: f32 = 0.002;

// MIDI
pub const CC_MOD_WHEEL: u8 = 1;
pub const CC_BRIGHTNESS: u8 = 74; // commonly filter cutoff
pub const MIDI_VALUE_MAX: u8 = 127;
pub const NOTE_ROTATION_LOW: u8 = 36; // C2
pub const NOTE_ROTATION_SPAN: f32 = 60.0; // C2..C7 maps onto 0..1
pub const NOTE_ROTATION_X: f32 = 0.01;
pub const NOTE_ROTATION_Y: f32 = 0.02;

// Auto-rotation per render tick (radians)
pub const SPIN_PER_TICK_X: f32 = 0.002;
pub const SPIN_PER_TICK_Y: f32 = 0.004;

// Sphere mesh
pub const SPHERE_RADIUS: f32 = 2.0;
pub const SPHERE_SEGMENTS: u32 = 128; // dense enough for per-vertex displacement
pub const SPHERE_OFFSET: Vec3 = Vec3::new(-0.5, 0.0, 0.0); // nudged left, into the key light

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

// Surface finish
pub const ROUGHNESS: f32 = 0.4;
pub const METALNESS: f32 = 0.05;
pub const CLEARCOAT: f32 = 0.4;
pub const DISPLACEMENT_BIAS: f32 = 0.0;
pub const NORMAL_SCALE: f32 = 1.0;

// Lights: no ambient term, a hard key light near the camera, a faint fill
// and a warm rim from behind.
pub const KEY_LIGHT_POSITION: [f32; 3] = [3.0, 1.0, 4.0];
pub const KEY_LIGHT_INTENSITY: f32 = 4.0;
pub const KEY_LIGHT_ANGLE: f32 = std::f32::consts::PI / 5.0;
pub const KEY_LIGHT_PENUMBRA: f32 = 0.2;
pub const KEY_LIGHT_DECAY: f32 = 1.2;
pub const KEY_LIGHT_DISTANCE: f32 = 25.0;

pub const FILL_LIGHT_POSITION: [f32; 3] = [-6.0, -1.0, -2.0];
pub const FILL_LIGHT_INTENSITY: f32 = 0.05;

pub const RIM_LIGHT_POSITION: [f32; 3] = [0.0, 4.0, -6.0];
pub const RIM_LIGHT_COLOR: u32 = 0xffffee;
pub const RIM_LIGHT_INTENSITY: f32 = 0.25;
pub const RIM_LIGHT_DECAY: f32 = 2.0;

// Textures
pub const DEFAULT_TEXTURE_URL: &str = "./images/Namib_Desert_pillars.jpg";

#[inline]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
