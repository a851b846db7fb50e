use glam::Mat4;
use sphere_core::{FrameInputs, SceneLights};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SphereUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
    eye: [f32; 4],
    material: [f32; 4],
    finish: [f32; 4],
    maps: [f32; 4],
    key_pos: [f32; 4],
    key_dir: [f32; 4],
    key_cone: [f32; 4],
    key_color: [f32; 4],
    fill_dir: [f32; 4],
    fill_color: [f32; 4],
    rim_pos: [f32; 4],
    rim_color: [f32; 4],
}

#[inline]
fn rgb_w(rgb: [f32; 3], w: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], w]
}

impl SphereUniforms {
    pub(crate) fn pack(frame: &FrameInputs, lights: &SceneLights, maps_loaded: [bool; 3]) -> Self {
        let m = &frame.material;
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        let (cos_outer, cos_inner) = lights.key.cone_cos();
        let key = &lights.key;
        Self {
            view_proj: frame.view_proj.to_cols_array_2d(),
            model: frame.model.to_cols_array_2d(),
            normal_matrix: normal_matrix(frame.model).to_cols_array_2d(),
            eye: frame.eye.extend(1.0).to_array(),
            material: [
                m.bump_scale,
                m.displacement_scale,
                m.displacement_bias,
                m.roughness,
            ],
            finish: [m.metalness, m.clearcoat, m.normal_scale, 0.0],
            maps: [
                flag(maps_loaded[0]),
                flag(maps_loaded[1]),
                flag(maps_loaded[2]),
                0.0,
            ],
            key_pos: key.position.extend(key.intensity).to_array(),
            key_dir: key.direction().extend(cos_outer).to_array(),
            key_cone: [cos_inner, key.decay, key.distance, 0.0],
            key_color: rgb_w(key.color, 1.0),
            fill_dir: lights
                .fill
                .to_light()
                .extend(lights.fill.intensity)
                .to_array(),
            fill_color: rgb_w(lights.fill.color, 1.0),
            rim_pos: lights.rim.position.extend(lights.rim.intensity).to_array(),
            rim_color: rgb_w(lights.rim.color, lights.rim.decay),
        }
    }
}

#[inline]
fn normal_matrix(model: Mat4) -> Mat4 {
    model.inverse().transpose()
}
