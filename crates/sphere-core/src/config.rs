use crate::constants::*;
use crate::drag::DragSensitivity;
use crate::midi::ControlBinding;
use crate::params::{ParamRange, ParameterState};
use crate::scene::Rotation;

/// Image URLs for the three material maps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureSet {
    pub map: String,
    pub bump_map: String,
    pub displacement_map: String,
}

impl TextureSet {
    /// One image used for colour, bump and displacement alike.
    pub fn uniform(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            map: url.clone(),
            bump_map: url.clone(),
            displacement_map: url,
        }
    }
}

impl Default for TextureSet {
    fn default() -> Self {
        Self::uniform(DEFAULT_TEXTURE_URL)
    }
}

/// Startup tuning for the scene. `Default` reproduces the stock look.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub initial: ParameterState,
    pub bump_range: ParamRange,
    pub displacement_range: ParamRange,
    pub drag: DragSensitivity,
    pub binding: ControlBinding,
    pub spin_per_tick: Rotation,
    pub textures: TextureSet,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            initial: ParameterState::default(),
            bump_range: ParamRange::new(BUMP_MIN, BUMP_MAX),
            displacement_range: ParamRange::new(DISPLACEMENT_MIN, DISPLACEMENT_MAX),
            drag: DragSensitivity::default(),
            binding: ControlBinding::default(),
            spin_per_tick: Rotation {
                x: SPIN_PER_TICK_X,
                y: SPIN_PER_TICK_Y,
            },
            textures: TextureSet::default(),
        }
    }
}

impl SceneConfig {
    pub fn with_texture(mut self, url: impl Into<String>) -> Self {
        self.textures = TextureSet::uniform(url);
        self
    }
}
