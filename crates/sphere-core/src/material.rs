//! Surface and lighting description handed to the renderer each frame.

use crate::constants::*;
use crate::params::ParameterState;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialParams {
    pub bump_scale: f32,
    pub displacement_scale: f32,
    pub displacement_bias: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub clearcoat: f32,
    pub normal_scale: f32,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self::from_state(ParameterState::default())
    }
}

impl MaterialParams {
    pub fn from_state(state: ParameterState) -> Self {
        Self {
            bump_scale: state.bump_intensity,
            displacement_scale: state.displacement_intensity,
            displacement_bias: DISPLACEMENT_BIAS,
            roughness: ROUGHNESS,
            metalness: METALNESS,
            clearcoat: CLEARCOAT,
            normal_scale: NORMAL_SCALE,
        }
    }

    /// Copy the tunable scalars; the rest of the finish is fixed.
    #[inline]
    pub fn apply(&mut self, state: ParameterState) {
        self.bump_scale = state.bump_intensity;
        self.displacement_scale = state.displacement_intensity;
    }
}

/// Spot light with a soft edge and finite reach.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub target: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub angle: f32,
    pub penumbra: f32,
    pub decay: f32,
    pub distance: f32,
}

impl SpotLight {
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Cosines of the outer and inner cone edges.
    pub fn cone_cos(&self) -> (f32, f32) {
        let outer = self.angle.cos();
        let inner = (self.angle * (1.0 - self.penumbra)).cos();
        (outer, inner)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit vector pointing from the scene towards the light.
    pub fn to_light(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub decay: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLights {
    pub key: SpotLight,
    pub fill: DirectionalLight,
    pub rim: PointLight,
}

impl Default for SceneLights {
    fn default() -> Self {
        Self {
            key: SpotLight {
                position: Vec3::from_array(KEY_LIGHT_POSITION),
                target: Vec3::ZERO,
                color: [1.0, 1.0, 1.0],
                intensity: KEY_LIGHT_INTENSITY,
                angle: KEY_LIGHT_ANGLE,
                penumbra: KEY_LIGHT_PENUMBRA,
                decay: KEY_LIGHT_DECAY,
                distance: KEY_LIGHT_DISTANCE,
            },
            fill: DirectionalLight {
                position: Vec3::from_array(FILL_LIGHT_POSITION),
                color: [1.0, 1.0, 1.0],
                intensity: FILL_LIGHT_INTENSITY,
            },
            rim: PointLight {
                position: Vec3::from_array(RIM_LIGHT_POSITION),
                color: hex_to_rgb(RIM_LIGHT_COLOR),
                intensity: RIM_LIGHT_INTENSITY,
                decay: RIM_LIGHT_DECAY,
            },
        }
    }
}
